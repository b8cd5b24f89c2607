// services/medflow-web/src/main.rs
//
// MedFlow Site - Clinic workflow landing page with a live role demo
//

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("MedFlow site starting...");

    medflow_web::mount();
}
