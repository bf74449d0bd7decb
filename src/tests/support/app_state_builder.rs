use std::sync::Arc;

use actix_web::{http::StatusCode, web};

use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, ListTopicsUseCase,
    UpdateTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Builds an `AppState` whose use cases default to succeeding stubs.
pub struct TestAppStateBuilder {
    create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    get_single: Arc<dyn GetTopicUseCase + Send + Sync>,
    list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    privilege_denied_status: StatusCode,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create: Arc::new(StubCreateTopicUseCase::default()),
            get_single: Arc::new(StubGetTopicUseCase::not_found()),
            list: Arc::new(StubListTopicsUseCase::default()),
            update: Arc::new(StubUpdateTopicUseCase::default()),
            delete: Arc::new(StubDeleteTopicUseCase::default()),
            privilege_denied_status: StatusCode::IM_A_TEAPOT,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create(mut self, uc: impl CreateTopicUseCase + Send + Sync + 'static) -> Self {
        self.create = Arc::new(uc);
        self
    }

    pub fn with_get(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.get_single = Arc::new(uc);
        self
    }

    pub fn with_list(mut self, uc: impl ListTopicsUseCase + Send + Sync + 'static) -> Self {
        self.list = Arc::new(uc);
        self
    }

    pub fn with_update(mut self, uc: impl UpdateTopicUseCase + Send + Sync + 'static) -> Self {
        self.update = Arc::new(uc);
        self
    }

    pub fn with_delete(mut self, uc: impl DeleteTopicUseCase + Send + Sync + 'static) -> Self {
        self.delete = Arc::new(uc);
        self
    }

    pub fn with_privilege_denied_status(mut self, status: StatusCode) -> Self {
        self.privilege_denied_status = status;
        self
    }

    pub fn with_topic_use_cases(mut self, use_cases: TopicUseCases) -> Self {
        self.create = use_cases.create;
        self.get_single = use_cases.get_single;
        self.list = use_cases.list;
        self.update = use_cases.update;
        self.delete = use_cases.delete;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: TopicUseCases {
                create: self.create,
                get_single: self.get_single,
                list: self.list,
                update: self.update,
                delete: self.delete,
            },
            privilege_denied_status: self.privilege_denied_status,
        })
    }
}
