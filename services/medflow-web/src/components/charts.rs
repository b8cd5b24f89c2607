// services/medflow-web/src/components/charts.rs
//
// MedFlow Site - SVG charts for the admin dashboard
//

use leptos::*;
use medflow_shared::chart::{area_path, axis_ticks, bars, line_path, ChartFrame};
use medflow_shared::types::ChartPoint;

const Y_TICKS: usize = 5;

#[component]
pub fn AreaChart(points: Vec<ChartPoint>) -> impl IntoView {
    let frame = ChartFrame::default();
    let line = line_path(&points, frame);
    let area = area_path(&points, frame);
    let ticks = axis_ticks(&points, Y_TICKS);

    view! {
        <div class="flex gap-2">
            <AxisLabels ticks=ticks />
            <div class="flex-1">
                <svg class="h-48 w-full" viewBox=format!("0 0 {} {}", frame.width, frame.height) preserveAspectRatio="none">
                    <defs>
                        <linearGradient id="revenue-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
                            <stop offset="0%" stop-color="#2563eb" stop-opacity="0.35" />
                            <stop offset="100%" stop-color="#2563eb" stop-opacity="0.0" />
                        </linearGradient>
                    </defs>
                    <path d=area fill="url(#revenue-gradient)" />
                    <path d=line fill="none" stroke="#2563eb" stroke-width="3" stroke-linejoin="round" />
                </svg>
                <XLabels points=points />
            </div>
        </div>
    }
}

#[component]
pub fn BarChart(points: Vec<ChartPoint>) -> impl IntoView {
    let frame = ChartFrame::default();
    let rects = bars(&points, frame, 0.5);
    let ticks = axis_ticks(&points, Y_TICKS);

    view! {
        <div class="flex gap-2">
            <AxisLabels ticks=ticks />
            <div class="flex-1">
                <svg class="h-48 w-full" viewBox=format!("0 0 {} {}", frame.width, frame.height) preserveAspectRatio="none">
                    {rects
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <rect
                                    x=format!("{:.1}", bar.x)
                                    y=format!("{:.1}", bar.y)
                                    width=format!("{:.1}", bar.width)
                                    height=format!("{:.1}", bar.height)
                                    rx="6"
                                    fill="#6366f1"
                                    data-label=bar.label
                                />
                            }
                        })
                        .collect_view()}
                </svg>
                <XLabels points=points />
            </div>
        </div>
    }
}

#[component]
fn AxisLabels(ticks: Vec<f64>) -> impl IntoView {
    view! {
        <div class="flex h-48 flex-col justify-between py-1 text-right text-[10px] text-slate-400">
            {ticks
                .into_iter()
                .map(|tick| view! { <span>{format!("{tick:.0}")}</span> })
                .collect_view()}
        </div>
    }
}

#[component]
fn XLabels(points: Vec<ChartPoint>) -> impl IntoView {
    view! {
        <div class="mt-2 flex justify-between text-xs text-slate-400">
            {points
                .into_iter()
                .map(|point| view! { <span>{point.label}</span> })
                .collect_view()}
        </div>
    }
}
