// services/medflow-web/src/components/mod.rs
//
// MedFlow Site - UI Components
//

mod admin;
mod charts;
mod demo;
mod doctor;
mod features;
mod footer;
mod hero;
mod icons;
mod nav;
mod patient;
mod reveal;
mod telegram;
mod why_us;

pub use demo::DemoShell;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use reveal::Reveal;
pub use telegram::TelegramPromo;
pub use why_us::WhyUs;
