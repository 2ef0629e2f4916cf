use std::sync::Arc;

use despensa_core::application::DespensaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DespensaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DespensaService) -> Self {
        Self { args, service }
    }
}
