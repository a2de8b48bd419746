// Application state for HTTP handlers
use crate::application::footprint_service::FootprintService;
use crate::infrastructure::config::PresetCatalog;

#[derive(Clone)]
pub struct AppState {
    pub footprint_service: FootprintService,
    pub preset_catalog: PresetCatalog,
}
