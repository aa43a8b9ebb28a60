//! View construction entry point.
//!
//! One record in, one freshly rendered view out. Views are not pooled or
//! reused across records.

use inventory_client::Project;

use crate::builder::build_project_view;
use crate::context::ViewContext;
use crate::message::Message;
use crate::model::ProjectViewModel;
use crate::renderer::ProjectRenderer;

/// Container key for a project's view.
pub fn container_id(public_id: &str) -> String {
    format!("#{public_id}")
}

/// A view bound to its container together with its first render.
#[derive(Debug, Clone)]
pub struct MountedView<O> {
    pub container: String,
    pub model: ProjectViewModel,
    pub output: O,
}

/// Build the view for `project`, bind it to `#<public_id>` and render it.
pub fn mount_project_view<R: ProjectRenderer>(
    project: &Project,
    context: &ViewContext,
    renderer: &R,
    message: Option<&Message>,
) -> MountedView<R::Output> {
    let model = build_project_view(project, context, None);
    tracing::debug!(container = %model.container, "Mounting project view");
    let output = renderer.render(&model, message);
    MountedView {
        container: model.container.clone(),
        model,
        output,
    }
}
