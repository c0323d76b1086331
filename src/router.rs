use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::page::{ClickEvent, Element};
use crate::types::RecordId;

/// The regions a click listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    AddButton,
    TableBody,
    Form,
    Backdrop,
}

impl Region {
    pub fn root_class(self) -> &'static str {
        match self {
            Region::AddButton => "add-user",
            Region::TableBody => "table",
            Region::Form => "form",
            Region::Backdrop => "form-popup",
        }
    }

    pub fn root(self) -> Element {
        Element::new(self.root_class())
    }
}

/// Role of a clickable control, carried as its class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTag {
    Delete,
    Edit,
    Close,
    Submit,
}

impl ActionTag {
    pub fn class(self) -> &'static str {
        match self {
            ActionTag::Delete => "delete",
            ActionTag::Edit => "edit",
            ActionTag::Close => "close",
            ActionTag::Submit => "submit",
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

impl FromStr for ActionTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delete" => Ok(ActionTag::Delete),
            "edit" => Ok(ActionTag::Edit),
            "close" => Ok(ActionTag::Close),
            "submit" => Ok(ActionTag::Submit),
            _ => Err(()),
        }
    }
}

/// What a click asks the front-end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    OpenAdd,
    Delete(RecordId),
    Edit(RecordId),
    Close,
    Submit,
}

const TABLE_ROUTES: &[ActionTag] = &[ActionTag::Delete, ActionTag::Edit];
const FORM_ROUTES: &[ActionTag] = &[ActionTag::Close, ActionTag::Submit];

/// Tags each region reacts to; anything else clicked there is ignored.
fn routes(region: Region) -> &'static [ActionTag] {
    match region {
        Region::TableBody => TABLE_ROUTES,
        Region::Form => FORM_ROUTES,
        Region::AddButton | Region::Backdrop => &[],
    }
}

fn routed_tag(region: Region, target: &Element) -> Option<ActionTag> {
    let tag = target.class.parse::<ActionTag>().ok()?;
    routes(region).contains(&tag).then_some(tag)
}

/// Resolve a click into an intent, or `None` when the click means nothing.
pub fn route(event: &ClickEvent) -> Option<Intent> {
    match event.region {
        Region::AddButton => Some(Intent::OpenAdd),
        // Only a click on the backdrop itself closes; clicks inside the form bubble here too.
        Region::Backdrop => (event.target == event.current_target).then_some(Intent::Close),
        Region::TableBody => {
            let Some(tag) = routed_tag(Region::TableBody, &event.target) else {
                debug!(class = %event.target.class, "ignoring table click");
                return None;
            };
            let Some(id) = event.target.row.clone() else {
                warn!(%tag, "table control outside of any row");
                return None;
            };
            match tag {
                ActionTag::Delete => Some(Intent::Delete(id)),
                ActionTag::Edit => Some(Intent::Edit(id)),
                ActionTag::Close | ActionTag::Submit => None,
            }
        }
        Region::Form => match routed_tag(Region::Form, &event.target) {
            Some(ActionTag::Close) => Some(Intent::Close),
            Some(ActionTag::Submit) => Some(Intent::Submit),
            _ => {
                debug!(class = %event.target.class, "ignoring form click");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> RecordId {
        RecordId::new(raw)
    }

    #[test]
    fn test_add_button_always_opens() {
        let event = ClickEvent::on_root(Region::AddButton);
        assert_eq!(route(&event), Some(Intent::OpenAdd));
    }

    #[test]
    fn test_table_controls() {
        let delete = ClickEvent::on(Region::TableBody, Element::in_row("delete", id("42")));
        let edit = ClickEvent::on(Region::TableBody, Element::in_row("edit", id("7")));
        assert_eq!(route(&delete), Some(Intent::Delete(id("42"))));
        assert_eq!(route(&edit), Some(Intent::Edit(id("7"))));
    }

    #[test]
    fn test_table_ignores_cells_and_form_tags() {
        let cell = ClickEvent::on(Region::TableBody, Element::in_row("name", id("1")));
        let submit = ClickEvent::on(Region::TableBody, Element::in_row("submit", id("1")));
        assert_eq!(route(&cell), None);
        assert_eq!(route(&submit), None);
    }

    #[test]
    fn test_table_control_without_row_is_ignored() {
        let event = ClickEvent::on(Region::TableBody, Element::new("delete"));
        assert_eq!(route(&event), None);
    }

    #[test]
    fn test_form_controls() {
        let close = ClickEvent::on(Region::Form, Element::new("close"));
        let submit = ClickEvent::on(Region::Form, Element::new("submit"));
        let field = ClickEvent::on(Region::Form, Element::new("name"));
        let edit = ClickEvent::on(Region::Form, Element::new("edit"));
        assert_eq!(route(&close), Some(Intent::Close));
        assert_eq!(route(&submit), Some(Intent::Submit));
        assert_eq!(route(&field), None);
        assert_eq!(route(&edit), None);
    }

    #[test]
    fn test_backdrop_closes_only_on_itself() {
        let outside = ClickEvent::on_root(Region::Backdrop);
        let inside = ClickEvent::on(Region::Backdrop, Element::new("name"));
        assert_eq!(route(&outside), Some(Intent::Close));
        assert_eq!(route(&inside), None);
    }

    #[test]
    fn test_tag_round_trips_through_class() {
        for tag in [ActionTag::Delete, ActionTag::Edit, ActionTag::Close, ActionTag::Submit] {
            assert_eq!(tag.class().parse::<ActionTag>(), Ok(tag));
        }
        assert!("hidden".parse::<ActionTag>().is_err());
    }
}
