//! Handlers adapting each request to a single `UserClient` call.
//!
//! # Design
//! Every handler owns a clone of the client (cheap: the requester sits
//! behind an `Arc`) and does nothing beyond unpacking its request and making
//! one call. `UserHandlers` bundles all four and offers a dispatch over the
//! closed `UserRequest` enum, where a missing handler cannot be expressed.

use crate::client::UserClient;
use crate::error::Result;
use crate::filter::FilterParams;
use crate::mediator::Mediator;
use crate::request::{CreateUser, DeleteUser, ListUsers, Request, UpdateUser};
use crate::types::User;

/// Executes one request type.
pub trait Handler<R: Request>: Send + Sync {
    fn handle(&self, request: R) -> Result<R::Output>;
}

impl<R, F> Handler<R> for F
where
    R: Request,
    F: Fn(R) -> Result<R::Output> + Send + Sync,
{
    fn handle(&self, request: R) -> Result<R::Output> {
        self(request)
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserHandler {
    client: UserClient,
}

impl CreateUserHandler {
    pub fn new(client: UserClient) -> Self {
        Self { client }
    }
}

impl Handler<CreateUser> for CreateUserHandler {
    fn handle(&self, request: CreateUser) -> Result<User> {
        Ok(self.client.create(&request.fields())?)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUserHandler {
    client: UserClient,
}

impl UpdateUserHandler {
    pub fn new(client: UserClient) -> Self {
        Self { client }
    }
}

impl Handler<UpdateUser> for UpdateUserHandler {
    fn handle(&self, request: UpdateUser) -> Result<User> {
        Ok(self.client.update(request.id, &request.fields())?)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteUserHandler {
    client: UserClient,
}

impl DeleteUserHandler {
    pub fn new(client: UserClient) -> Self {
        Self { client }
    }
}

impl Handler<DeleteUser> for DeleteUserHandler {
    fn handle(&self, request: DeleteUser) -> Result<()> {
        Ok(self.client.delete(request.id)?)
    }
}

#[derive(Debug, Clone)]
pub struct ListUsersHandler {
    client: UserClient,
}

impl ListUsersHandler {
    pub fn new(client: UserClient) -> Self {
        Self { client }
    }
}

impl Handler<ListUsers> for ListUsersHandler {
    fn handle(&self, request: ListUsers) -> Result<Vec<User>> {
        let filters = FilterParams::from(&request);
        Ok(self.client.list(&filters)?)
    }
}

/// Any of the user requests, for callers that route on a value rather than
/// a static type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRequest {
    Create(CreateUser),
    Update(UpdateUser),
    Delete(DeleteUser),
    List(ListUsers),
}

impl From<CreateUser> for UserRequest {
    fn from(request: CreateUser) -> Self {
        UserRequest::Create(request)
    }
}

impl From<UpdateUser> for UserRequest {
    fn from(request: UpdateUser) -> Self {
        UserRequest::Update(request)
    }
}

impl From<DeleteUser> for UserRequest {
    fn from(request: DeleteUser) -> Self {
        UserRequest::Delete(request)
    }
}

impl From<ListUsers> for UserRequest {
    fn from(request: ListUsers) -> Self {
        UserRequest::List(request)
    }
}

/// Result of handling a `UserRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResponse {
    User(User),
    Users(Vec<User>),
    Deleted,
}

/// One handler per user request, all sharing a client.
#[derive(Debug, Clone)]
pub struct UserHandlers {
    create: CreateUserHandler,
    update: UpdateUserHandler,
    delete: DeleteUserHandler,
    list: ListUsersHandler,
}

impl UserHandlers {
    pub fn new(client: UserClient) -> Self {
        Self {
            create: CreateUserHandler::new(client.clone()),
            update: UpdateUserHandler::new(client.clone()),
            delete: DeleteUserHandler::new(client.clone()),
            list: ListUsersHandler::new(client),
        }
    }

    /// Validate and run `request` with its handler.
    pub fn handle(&self, request: UserRequest) -> Result<UserResponse> {
        match request {
            UserRequest::Create(req) => run(&self.create, req).map(UserResponse::User),
            UserRequest::Update(req) => run(&self.update, req).map(UserResponse::User),
            UserRequest::Delete(req) => run(&self.delete, req).map(|()| UserResponse::Deleted),
            UserRequest::List(req) => run(&self.list, req).map(UserResponse::Users),
        }
    }

    /// A mediator with every user handler registered.
    pub fn into_mediator(self) -> Result<Mediator> {
        Mediator::builder()
            .register::<CreateUser, _>(self.create)
            .register::<UpdateUser, _>(self.update)
            .register::<DeleteUser, _>(self.delete)
            .register::<ListUsers, _>(self.list)
            .build()
    }
}

fn run<R: Request, H: Handler<R>>(handler: &H, request: R) -> Result<R::Output> {
    request.validate()?;
    tracing::debug!(request = R::NAME, "handling request");
    handler.handle(request)
}
