use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use business::domain::logger::Logger;
use business::domain::user::errors::UserError;
use business::domain::user::model::User;
use business::domain::user::use_cases::get_age::GetAgeUseCase;
use business::domain::user::use_cases::get_user::GetUserUseCase;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserViewState {
    pub user: Option<User>,
    pub age: Option<u32>,
    pub is_loading: bool,
}

impl Default for UserViewState {
    fn default() -> Self {
        Self {
            user: None,
            age: None,
            is_loading: true,
        }
    }
}

/// Profile screen state. Loads without simulated latency; failures are
/// only logged and leave the previous values in place.
pub struct UserViewModel {
    get_user: Arc<dyn GetUserUseCase>,
    get_age: Arc<dyn GetAgeUseCase>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<UserViewState>,
}

impl UserViewModel {
    pub fn new(
        get_user: Arc<dyn GetUserUseCase>,
        get_age: Arc<dyn GetAgeUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (state, _) = watch::channel(UserViewState::default());
        Self {
            get_user,
            get_age,
            logger,
            state,
        }
    }

    pub fn state(&self) -> UserViewState {
        self.state.borrow().clone()
    }

    pub async fn refresh(&self) {
        self.state.send_modify(|state| state.is_loading = true);

        let loaded = async {
            let user = self.get_user.execute().await?;
            let age = self.get_age.execute().await?;
            Ok::<_, UserError>((user, age))
        }
        .await;

        match loaded {
            Ok((user, age)) => self.state.send_modify(|state| {
                state.user = Some(user);
                state.age = Some(age);
                state.is_loading = false;
            }),
            Err(err) => {
                self.logger
                    .error(&format!("Error loading user data: {:?}", err));
                self.state.send_modify(|state| state.is_loading = false);
            }
        }
    }
}
