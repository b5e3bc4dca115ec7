use crate::shared::list_state::ListState;
use contracts::system::users::UserRow;
use leptos::prelude::*;

pub type UsersListState = ListState<UserRow>;

pub fn create_state(page_size: usize) -> RwSignal<UsersListState> {
    RwSignal::new(ListState::new(page_size))
}
