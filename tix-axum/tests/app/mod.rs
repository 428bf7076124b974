use headers::{Authorization, authorization::Bearer};
use tix_core::{
    models::{DateTime, UserId},
    ports::Application,
};
use tix_sqlite::Db;

/// The bearer token is the plain-text user id.
#[derive(Clone)]
pub struct TestApp(pub Db);

impl Application for TestApp {
    type Context = Authorization<Bearer>;
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.0
    }

    fn now(&self) -> DateTime {
        time::OffsetDateTime::now_utc().into()
    }

    async fn authenticate(&self, context: &Self::Context) -> Option<UserId> {
        context.token().parse().ok()
    }
}
