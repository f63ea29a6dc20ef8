use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::config_query::read_global_config;
use crate::modules::gateway::application::ports::outgoing::{
    Record, RecordStore, SelectQuery,
};
use crate::modules::portfolio::application::domain::{
    Achievement, Education, Experience, GlobalConfig, PortfolioPayload, Project, Skill,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::FetchPortfolioUseCase;
use crate::modules::schema::Collection;

pub struct FetchPortfolioService {
    store: Arc<dyn RecordStore>,
}

impl FetchPortfolioService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    async fn load_config(&self) -> Option<GlobalConfig> {
        match read_global_config(self.store.as_ref()).await {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = %e, "Failed to load site config");
                None
            }
        }
    }

    async fn load<T: DeserializeOwned>(&self, collection: Collection) -> Option<Vec<T>> {
        let query = SelectQuery::ordered(collection.ordering());
        match self.store.select(collection.table(), query).await {
            Ok(records) => Some(decode_rows(collection, records)),
            Err(e) => {
                error!(collection = %collection, error = %e, "Failed to load section");
                None
            }
        }
    }
}

/// Rows that do not fit the entity are skipped.
fn decode_rows<T: DeserializeOwned>(collection: Collection, records: Vec<Record>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<T>(Value::Object(row)) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(collection = %collection, error = %e, "Skipping unreadable row");
                None
            }
        })
        .collect()
}

#[async_trait]
impl FetchPortfolioUseCase for FetchPortfolioService {
    async fn execute(&self) -> PortfolioPayload {
        let (config, experience, projects, skills, achievements, education) = futures::join!(
            self.load_config(),
            self.load::<Experience>(Collection::Experience),
            self.load::<Project>(Collection::Projects),
            self.load::<Skill>(Collection::Skills),
            self.load::<Achievement>(Collection::Achievements),
            self.load::<Education>(Collection::Education),
        );

        info!(
            config = config.is_some(),
            experience = experience.as_ref().map_or(0, Vec::len),
            projects = projects.as_ref().map_or(0, Vec::len),
            skills = skills.as_ref().map_or(0, Vec::len),
            achievements = achievements.as_ref().map_or(0, Vec::len),
            education = education.as_ref().map_or(0, Vec::len),
            "Portfolio fetched"
        );

        PortfolioPayload {
            config,
            experience,
            projects,
            skills,
            achievements,
            education,
        }
    }
}
