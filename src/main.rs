use geoquest::GeoQuestApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    geoquest::logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "GeoQuest",
        options,
        Box::new(|cc| Ok(Box::new(GeoQuestApp::new(cc)))),
    )
}

// ===== SOLO PARA WEB =====
#[cfg(target_arch = "wasm32")]
fn main() {
    use web_sys::wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #the_canvas_id not found");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(GeoQuestApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start GeoQuest: {e:?}");
        }
    });
}
