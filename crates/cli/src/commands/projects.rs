//! Project commands.
//!
//! Responsibilities:
//! - List projects one page at a time.
//! - Render a single project through the shared view-model.
//! - Apply edits through `ProjectEditor` and save them.
//! - Show the field metadata that labels project fields.
//!
//! Does NOT handle:
//! - Retrying failed saves; a rejected save is reported once and the command fails.
//! - Output layout details (see formatters module).
//!
//! Invariants:
//! - `show` and `update` load the project, field metadata and inventory types
//!   concurrently before rendering anything.
//! - A failed save changes nothing locally and prints the server's detail.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use inventory_client::{InventoryClient, ListProjectsOptions, Project};
use inventory_config::Config;
use inventory_config::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use inventory_view::{
    MessageBoard, ProjectEditor, ProjectRenderer, ViewContext, ViewError, mount_project_view,
};
use tracing::{info, warn};

use crate::cancellation::CancellationToken;
use crate::commands::build_client_from_config;
use crate::formatters::{
    FormatterRenderer, OutputFormat, Pagination, get_formatter, output_result,
};

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List projects one page at a time
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Projects per page (server maximum is 200)
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
        /// Only active (true) or inactive (false) projects
        #[arg(long)]
        active: Option<bool>,
    },
    /// Render one project with its labels and options
    Show {
        /// Public id of the project
        public_id: String,
    },
    /// Change a project's fields and save them
    Update {
        /// Public id of the project
        public_id: String,
        /// New project name
        #[arg(long)]
        name: Option<String>,
        /// Public id of the new inventory type
        #[arg(long)]
        inventory_type: Option<String>,
        /// Whether the project is public
        #[arg(long)]
        public: Option<bool>,
        /// Whether the project is active
        #[arg(long)]
        active: Option<bool>,
        /// Image file to upload as the project logo
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
    },
    /// Show the field metadata used to label project fields
    Metadata,
}

/// Edits requested by `projects update`.
#[derive(Debug, Default)]
struct ProjectEdits {
    name: Option<String>,
    inventory_type: Option<String>,
    public: Option<bool>,
    active: Option<bool>,
    image: Option<PathBuf>,
}

impl ProjectEdits {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.inventory_type.is_none()
            && self.public.is_none()
            && self.active.is_none()
            && self.image.is_none()
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn run(
    config: Config,
    metrics: bool,
    command: ProjectsCommand,
    output_format: &str,
    output_file: Option<PathBuf>,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = output_format.parse::<OutputFormat>()?;
    let client = build_client_from_config(&config, metrics)?;

    match command {
        ProjectsCommand::List {
            page,
            page_size,
            active,
        } => run_list(&client, page, page_size, active, format, output_file, cancel).await,
        ProjectsCommand::Show { public_id } => {
            run_show(&client, &public_id, format, output_file, cancel).await
        }
        ProjectsCommand::Update {
            public_id,
            name,
            inventory_type,
            public,
            active,
            image,
        } => {
            let edits = ProjectEdits {
                name,
                inventory_type,
                public,
                active,
                image,
            };
            run_update(&client, &public_id, edits, format, output_file, quiet, cancel).await
        }
        ProjectsCommand::Metadata => {
            info!("Fetching project field metadata");
            let metadata = cancel.run(client.project_metadata()).await?;
            let output = get_formatter(format).format_metadata(&metadata)?;
            output_result(&output, format, output_file.as_ref())
        }
    }
}

async fn run_list(
    client: &InventoryClient,
    page: usize,
    page_size: usize,
    active: Option<bool>,
    format: OutputFormat,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    if page_size > MAX_PAGE_SIZE {
        warn!(
            requested = page_size,
            max = MAX_PAGE_SIZE,
            "Page size exceeds server maximum, clamping"
        );
    }
    let page = page.max(1);
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    info!(page, page_size, "Listing projects");

    let options = ListProjectsOptions {
        page: Some(page),
        page_size: Some(page_size),
        active,
    };
    let projects = cancel.run(client.list_projects(&options)).await?;

    let pagination = Pagination {
        page,
        page_size,
        total: projects.count,
    };
    let output = get_formatter(format).format_projects(&projects, &pagination)?;
    output_result(&output, format, output_file.as_ref())
}

/// Fetch the project together with the reference data its view needs.
async fn load_project(
    client: &InventoryClient,
    public_id: &str,
) -> Result<(Project, ViewContext), ViewError> {
    let project = async {
        client
            .get_project(public_id)
            .await
            .map_err(|e| ViewError::fetch("project", e))
    };
    tokio::try_join!(project, ViewContext::load(client))
}

async fn run_show(
    client: &InventoryClient,
    public_id: &str,
    format: OutputFormat,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(public_id = %public_id, "Showing project");
    let (project, context) = cancel.run(load_project(client, public_id)).await?;

    let formatter = get_formatter(format);
    let mounted = mount_project_view(
        &project,
        &context,
        &FormatterRenderer(formatter.as_ref()),
        None,
    );
    output_result(&mounted.output?, format, output_file.as_ref())
}

async fn run_update(
    client: &InventoryClient,
    public_id: &str,
    edits: ProjectEdits,
    format: OutputFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    if edits.is_empty() {
        anyhow::bail!(
            "Nothing to update. Pass at least one of --name, --inventory-type, --public, --active or --image"
        );
    }
    if let Some(path) = &edits.image
        && !path.is_file()
    {
        anyhow::bail!("Image file not found: {}", path.display());
    }

    let (project, context) = cancel.run(load_project(client, public_id)).await?;
    let mut editor = ProjectEditor::new(project);

    if let Some(name) = edits.name {
        editor.set_name(name);
    }
    if let Some(type_id) = edits.inventory_type {
        if context.inventory_type(&type_id).is_none() {
            warn!(inventory_type = %type_id, "Unknown inventory type, sending public id as-is");
        }
        editor.set_inventory_type(&type_id, &context);
    }
    if let Some(public) = edits.public {
        editor.set_public(public);
    }
    if let Some(active) = edits.active {
        editor.set_active(active);
    }
    if let Some(image) = edits.image {
        editor.choose_image(image);
    }

    let mut board = MessageBoard::new();
    cancel.run(editor.save(client, &mut board)).await?;

    if quiet {
        return Ok(());
    }
    let formatter = get_formatter(format);
    let output =
        FormatterRenderer(formatter.as_ref()).render(&editor.view(&context), board.current())?;
    output_result(&output, format, output_file.as_ref())
}
