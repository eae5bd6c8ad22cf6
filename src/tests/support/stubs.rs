use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::{Player, Team, TeamId, TeamWithPlayers};
use crate::modules::stats::application::ports::incoming::use_cases::{
    ListPlayersError, ListPlayersUseCase, ListTeamsError, ListTeamsUseCase,
    ListTeamsWithPlayersError, ListTeamsWithPlayersUseCase,
};
use crate::modules::users::application::domain::entities::{
    NewUser, PageRequest, User, UserChanges, UserId,
};
use crate::modules::users::application::ports::incoming::use_cases::{
    CreateUserError, CreateUserUseCase, DeleteUserError, DeleteUserUseCase, GetUserError,
    GetUserUseCase, ListUsersError, ListUsersUseCase, UpdateUserError, UpdateUserUseCase,
};

const NOT_CONFIGURED: &str = "stub not configured for this test";

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubCreateUserUseCase {
    pub result: Result<User, CreateUserError>,
}

impl StubCreateUserUseCase {
    pub fn success(user: User) -> Self {
        Self { result: Ok(user) }
    }

    pub fn error(err: CreateUserError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _user: NewUser) -> Result<User, CreateUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetUserUseCase {
    pub result: Result<Option<User>, GetUserError>,
}

impl StubGetUserUseCase {
    pub fn found(user: User) -> Self {
        Self {
            result: Ok(Some(user)),
        }
    }

    pub fn missing() -> Self {
        Self { result: Ok(None) }
    }

    pub fn error(err: GetUserError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _id: UserId) -> Result<Option<User>, GetUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateUserUseCase {
    pub result: Result<User, UpdateUserError>,
}

impl StubUpdateUserUseCase {
    pub fn success(user: User) -> Self {
        Self { result: Ok(user) }
    }

    pub fn error(err: UpdateUserError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _id: UserId, _changes: UserChanges) -> Result<User, UpdateUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteUserUseCase {
    pub result: Result<(), DeleteUserError>,
}

impl StubDeleteUserUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeleteUserError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _id: UserId) -> Result<(), DeleteUserError> {
        self.result.clone()
    }
}

/// Also records every page it was asked for.
#[derive(Clone)]
pub struct StubListUsersUseCase {
    pub result: Result<Vec<User>, ListUsersError>,
    seen: Arc<Mutex<Vec<PageRequest>>>,
}

impl StubListUsersUseCase {
    pub fn success(users: Vec<User>) -> Self {
        Self {
            result: Ok(users),
            seen: Arc::default(),
        }
    }

    pub fn error(err: ListUsersError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::default(),
        }
    }

    pub fn seen_pages(&self) -> Arc<Mutex<Vec<PageRequest>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, page: PageRequest) -> Result<Vec<User>, ListUsersError> {
        self.seen.lock().unwrap().push(page);
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Stats
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubListTeamsUseCase {
    pub result: Result<Vec<Team>, ListTeamsError>,
}

impl StubListTeamsUseCase {
    pub fn success(teams: Vec<Team>) -> Self {
        Self { result: Ok(teams) }
    }

    pub fn error(err: ListTeamsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ListTeamsUseCase for StubListTeamsUseCase {
    async fn execute(&self) -> Result<Vec<Team>, ListTeamsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListPlayersUseCase {
    pub result: Result<Vec<Player>, ListPlayersError>,
}

impl StubListPlayersUseCase {
    pub fn success(players: Vec<Player>) -> Self {
        Self {
            result: Ok(players),
        }
    }

    pub fn error(err: ListPlayersError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ListPlayersUseCase for StubListPlayersUseCase {
    async fn execute(&self, _team_id: TeamId) -> Result<Vec<Player>, ListPlayersError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListTeamsWithPlayersUseCase {
    pub result: Result<Vec<TeamWithPlayers>, ListTeamsWithPlayersError>,
}

impl StubListTeamsWithPlayersUseCase {
    pub fn success(teams: Vec<TeamWithPlayers>) -> Self {
        Self { result: Ok(teams) }
    }

    pub fn error(err: ListTeamsWithPlayersError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ListTeamsWithPlayersUseCase for StubListTeamsWithPlayersUseCase {
    async fn execute(&self) -> Result<Vec<TeamWithPlayers>, ListTeamsWithPlayersError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Defaults for use cases a test does not exercise
// ──────────────────────────────────────────────────────────
//

pub fn unconfigured_user_stubs() -> (
    StubCreateUserUseCase,
    StubGetUserUseCase,
    StubUpdateUserUseCase,
    StubDeleteUserUseCase,
    StubListUsersUseCase,
) {
    (
        StubCreateUserUseCase::error(CreateUserError::RepositoryError(NOT_CONFIGURED.into())),
        StubGetUserUseCase::error(GetUserError::RepositoryError(NOT_CONFIGURED.into())),
        StubUpdateUserUseCase::error(UpdateUserError::RepositoryError(NOT_CONFIGURED.into())),
        StubDeleteUserUseCase::error(DeleteUserError::RepositoryError(NOT_CONFIGURED.into())),
        StubListUsersUseCase::error(ListUsersError::QueryFailed(NOT_CONFIGURED.into())),
    )
}

pub fn unconfigured_stats_stubs() -> (
    StubListTeamsUseCase,
    StubListPlayersUseCase,
    StubListTeamsWithPlayersUseCase,
) {
    (
        StubListTeamsUseCase::error(ListTeamsError::Provider(NOT_CONFIGURED.into())),
        StubListPlayersUseCase::error(ListPlayersError::Provider(NOT_CONFIGURED.into())),
        StubListTeamsWithPlayersUseCase::error(ListTeamsWithPlayersError::Provider(
            NOT_CONFIGURED.into(),
        )),
    )
}
