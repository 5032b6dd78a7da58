use debug_quiz::QuizApp;
use debug_quiz::config::AppConfig;

const APP_TITLE: &str = "Debug the Bug - C Debugging Quiz";

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: AppConfig,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(QuizApp::new(cc, config)?))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Configuración no válida, se usan los valores por defecto: {e}");
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| create_app(cc, config)),
    )
}

// ===== SOLO PARA WEB =====
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas 'the_canvas_id'");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| create_app(cc, AppConfig::default())),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar {APP_TITLE}: {e:?}");
        }
    });
}
