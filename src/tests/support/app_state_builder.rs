use std::sync::Arc;

use actix_web::web;

use crate::modules::stats::application::ports::incoming::use_cases::{
    ListPlayersUseCase, ListTeamsUseCase, ListTeamsWithPlayersUseCase,
};
use crate::modules::stats::application::stats_use_cases::StatsUseCases;
use crate::modules::users::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};
use crate::modules::users::application::user_use_cases::UserUseCases;
use crate::tests::support::stubs::{unconfigured_stats_stubs, unconfigured_user_stubs};
use crate::AppState;

pub struct TestAppStateBuilder {
    users: UserUseCases,
    stats: StatsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let (create, get, update, delete, list) = unconfigured_user_stubs();
        let (list_teams, list_players, list_teams_with_players) = unconfigured_stats_stubs();

        Self {
            users: UserUseCases {
                create: Arc::new(create),
                get: Arc::new(get),
                update: Arc::new(update),
                delete: Arc::new(delete),
                list: Arc::new(list),
            },
            stats: StatsUseCases {
                list_teams: Arc::new(list_teams),
                list_players: Arc::new(list_players),
                list_teams_with_players: Arc::new(list_teams_with_players),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.users.create = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.users.get = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.users.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.users.delete = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.users.list = Arc::new(uc);
        self
    }

    pub fn with_list_teams(mut self, uc: impl ListTeamsUseCase + Send + Sync + 'static) -> Self {
        self.stats.list_teams = Arc::new(uc);
        self
    }

    pub fn with_list_players(
        mut self,
        uc: impl ListPlayersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.stats.list_players = Arc::new(uc);
        self
    }

    pub fn with_list_teams_with_players(
        mut self,
        uc: impl ListTeamsWithPlayersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.stats.list_teams_with_players = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            users: self.users,
            stats: self.stats,
        })
    }
}
