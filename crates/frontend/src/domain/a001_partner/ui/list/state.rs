use crate::shared::list_state::ListState;
use contracts::domain::a001_partner::PartnerRow;
use leptos::prelude::*;

pub type PartnerListState = ListState<PartnerRow>;

pub fn create_state(page_size: usize) -> RwSignal<PartnerListState> {
    RwSignal::new(ListState::new(page_size))
}
