use std::sync::Arc;

use super::ports::incoming::use_cases::{
    AdminAuthUseCase, RecordEditorUseCase, SaveGeneralSettingsUseCase,
};
use crate::modules::collection::CollectionRenderer;

#[derive(Clone)]
pub struct DashboardUseCases {
    pub auth: Arc<dyn AdminAuthUseCase + Send + Sync>,
    pub editor: Arc<dyn RecordEditorUseCase + Send + Sync>,
    pub save_general: Arc<dyn SaveGeneralSettingsUseCase + Send + Sync>,
    pub lists: CollectionRenderer,
}
