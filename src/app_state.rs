use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{CompletionClient, OpenAiCompletionClient},
        points_service::InMemoryPointsLedger,
        quiz_service::QuizService,
        summary_service::SummaryService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub summary_service: Arc<SummaryService>,
    pub points_ledger: Arc<InMemoryPointsLedger>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_client(config, client)
    }

    /// Builds the state around an existing completion client.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let points_ledger = Arc::new(InMemoryPointsLedger::new());
        let timeout = config.completion_timeout();

        let quiz_service = Arc::new(QuizService::new(
            Arc::clone(&client),
            points_ledger.clone(),
            timeout,
        ));
        let summary_service = Arc::new(SummaryService::new(
            client,
            points_ledger.clone(),
            timeout,
        ));

        Self {
            quiz_service,
            summary_service,
            points_ledger,
            config: Arc::new(config),
        }
    }
}
