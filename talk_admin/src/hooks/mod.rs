//! UI hooks binding components into admin screens.
//!
//! A hook is a named extension point in an admin template (for example
//! `sylius_admin.talk.update.content`). Each hook holds hookables that render
//! either a component or a template with a set of props. The built-in
//! configuration binds the talk form component into the talk update screen,
//! passing the form and the edited resource from the render context.

mod config;
mod props;
mod registry;

pub use config::{HookTarget, Hookable, HooksConfig};
pub use props::{PropValue, UnsupportedExpression};
pub use registry::{HookRegistry, RenderedHookable};

/// Hook rendered inside the talk update screen.
pub const TALK_UPDATE_CONTENT: &str = "sylius_admin.talk.update.content";

/// Component bound to [`TALK_UPDATE_CONTENT`] by default.
pub const TALK_FORM_COMPONENT: &str = "App\\Twig\\Component\\TalkFormComponent";
