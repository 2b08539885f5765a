/// Use cases module containing application business logic orchestration
mod collect_components;
mod publish_reports;

pub use collect_components::CollectComponentsUseCase;
pub use publish_reports::{
    PublishReportsUseCase, FULL_LIST_FILE, UNDEFINED_LICENSES_FILE, UNIQUE_LICENSES_FILE,
};
