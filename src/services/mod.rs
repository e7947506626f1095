//! Business logic services

pub mod catalog;
pub mod description;
pub mod graph;
pub mod loans;

use crate::{
    config::{BorrowConfig, GenAiConfig},
    error::AppResult,
    graph::GraphClient,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub description: description::DescriptionService,
    pub graph: graph::GraphService,
}

impl Services {
    /// Create all services with the given repository and graph client
    pub fn new(
        repository: Repository,
        borrow_config: BorrowConfig,
        genai_config: GenAiConfig,
        graph_client: GraphClient,
    ) -> AppResult<Self> {
        Ok(Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            loans: loans::LoansService::new(repository, borrow_config),
            description: description::DescriptionService::new(genai_config)?,
            graph: graph::GraphService::new(graph_client),
        })
    }
}
