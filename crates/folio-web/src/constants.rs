// DOM surface consumed by the frontend. The markup is external; these ids
// and classes are the contract with it.

pub const CANVAS_ID: &str = "bg-canvas";
pub const HERO_ID: &str = "hero";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const PROJECTS_CONTAINER_ID: &str = "projects-grid";
pub const CONTACT_FORM_ID: &str = "contact-form";

pub const NAV_LINK_SELECTOR: &str = "nav a[href^='#']";
pub const HEADER_SELECTOR: &str = "header";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const REVEAL_SELECTOR: &str = ".fade-in, .skill-meter";
pub const SKILL_FILL_SELECTOR: &str = ".skill-bar-fill";
pub const FEEDBACK_CLASS: &str = "field-feedback";

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const VALID_CLASS: &str = "valid";
pub const INVALID_CLASS: &str = "invalid";
