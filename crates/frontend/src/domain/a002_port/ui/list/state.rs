use crate::shared::list_state::ListState;
use contracts::domain::a002_port::PortRow;
use contracts::shared::table::SortSpec;
use leptos::prelude::*;

pub type PortListState = ListState<PortRow>;

/// Новые порты сверху
pub fn create_state(page_size: usize) -> RwSignal<PortListState> {
    let mut state = ListState::new(page_size);
    state.sort = Some(SortSpec::desc("insertedDate"));
    RwSignal::new(state)
}
