use pf_data::Filters;

/// Header navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Index,
    About,
    Mission,
    Contact,
}

impl NavTarget {
    pub fn fragment(&self) -> &'static str {
        match self {
            NavTarget::Index => "",
            NavTarget::About => "about",
            NavTarget::Mission => "mission",
            NavTarget::Contact => "contact",
        }
    }
}

/// User interaction reported by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Nav(NavTarget),
    SearchSubmitted(Filters),
    NextPage,
    PreviousPage,
    ToggleMap,
}

/// What a view asks the controller to do in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Navigate(String),
    FetchNextPage,
    FetchPreviousPage,
}
