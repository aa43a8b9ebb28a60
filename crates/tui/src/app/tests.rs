use std::collections::HashMap;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use inventory_client::{
    ClientError, FieldChoice, FieldDescriptor, FieldMetadata, InventoryType, Page, Project,
    ProjectUpdate, RootResource,
};
use inventory_view::{MessageLevel, SaveOutcome, SaveRequest, ViewContext, ViewError};
use ratatui::{Terminal, backend::TestBackend};
use serde_json::json;

use super::*;

const ID: &str = "RVB9AXBYA9JQYNZJ";

fn key(code: KeyCode) -> Action {
    Action::Input(KeyEvent::new(code, KeyModifiers::NONE))
}

fn project() -> Project {
    Project {
        public_id: ID.to_string(),
        name: "Main Warehouse".to_string(),
        inventory_type: Some("http://localhost/api/inventory-types/TW6BJB4DBE7XKRXK/".to_string()),
        inventory_type_public_id: Some("TW6BJB4DBE7XKRXK".to_string()),
        public: true,
        active: true,
        ..Default::default()
    }
}

fn yes_no(yes: &str, no: &str) -> FieldDescriptor {
    FieldDescriptor {
        label: None,
        help_text: None,
        choices: vec![
            FieldChoice {
                value: json!(true),
                display_name: yes.to_string(),
            },
            FieldChoice {
                value: json!(false),
                display_name: no.to_string(),
            },
        ],
        required: false,
        read_only: false,
        field_type: Some("choice".to_string()),
    }
}

fn context() -> ViewContext {
    let mut fields = HashMap::new();
    fields.insert("public".to_string(), yes_no("Yes", "No"));
    fields.insert("active".to_string(), yes_no("Active", "Inactive"));
    let types = vec![
        InventoryType {
            public_id: "TW6BJB4DBE7XKRXK".to_string(),
            name: "Stock".to_string(),
            description: None,
            href: Some("http://localhost/api/inventory-types/TW6BJB4DBE7XKRXK/".to_string()),
        },
        InventoryType {
            public_id: "FNJ3GMTTPQ6JZ7EE".to_string(),
            name: "Equipment".to_string(),
            description: None,
            href: Some("http://localhost/api/inventory-types/FNJ3GMTTPQ6JZ7EE/".to_string()),
        },
    ];
    ViewContext::new(Arc::new(FieldMetadata::new(fields)), Arc::new(types))
}

fn app() -> App {
    App::new(ConnectionContext {
        profile_name: Some("dev".to_string()),
        base_url: "http://localhost:8000/api/".to_string(),
        auth_mode: "token".to_string(),
    })
}

fn page(projects: Vec<Project>, next: bool) -> Page<Project> {
    Page {
        count: Some(projects.len() as u64),
        next: next.then(|| "http://localhost/api/projects/?page=2".to_string()),
        previous: None,
        results: projects,
    }
}

fn app_with_form() -> App {
    let mut app = app();
    app.update(Action::ProjectLoaded(Ok((project(), context()))));
    app
}

/// Press `s` and return the request the form sent.
fn sent_save(app: &mut App) -> SaveRequest {
    match app.update(key(KeyCode::Char('s'))) {
        Some(Action::SaveProject(request)) => request,
        other => panic!("expected SaveProject, got {other:?}"),
    }
}

fn screen_text(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn test_request_actions_are_passed_on_and_counted() {
    let mut app = app();
    let out = app.update(Action::LoadProjects { page: 1 });
    assert!(matches!(out, Some(Action::LoadProjects { page: 1 })));
    assert!(app.is_loading());

    app.update(Action::ProjectsLoaded {
        page: 1,
        result: Ok(page(vec![project()], false)),
    });
    assert!(!app.is_loading());
    assert_eq!(app.projects.as_ref().map(Vec::len), Some(1));
    assert_eq!(app.projects_state.selected(), Some(0));
}

#[test]
fn test_empty_later_page_shows_message() {
    let mut app = app();
    app.update(Action::ProjectsLoaded {
        page: 3,
        result: Ok(page(vec![], false)),
    });
    assert_eq!(app.board.text(), Some("No projects found on page 3."));
    assert_eq!(app.projects_state.selected(), None);
}

#[test]
fn test_fetch_failure_goes_to_message_slot() {
    let mut app = app();
    let error = ViewError::fetch("projects", ClientError::Unauthorized("Invalid token.".into()));
    app.update(Action::ProjectsLoaded {
        page: 1,
        result: Err(error),
    });
    let message = app.board.current().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert_eq!(message.text, "Failed to load projects: Invalid token.");
}

#[test]
fn test_root_loaded_sets_header_version() {
    let mut app = app();
    app.update(Action::RootLoaded(Ok(RootResource::from_response(
        json!({"version": "2.1", "projects": "http://localhost/api/projects/"}),
    ))));
    let screen = screen_text(&mut app, 100, 10);
    assert!(screen.contains("API 2.1"));
    assert!(screen.contains("profile: dev"));
}

#[test]
fn test_enter_opens_selected_project() {
    let mut app = app();
    app.update(Action::ProjectsLoaded {
        page: 1,
        result: Ok(page(vec![project()], false)),
    });
    let out = app.update(key(KeyCode::Enter));
    match out {
        Some(Action::OpenProject { public_id }) => assert_eq!(public_id, ID),
        other => panic!("expected OpenProject, got {other:?}"),
    }
}

#[test]
fn test_paging_keys() {
    let mut app = app();
    app.update(Action::ProjectsLoaded {
        page: 1,
        result: Ok(page(vec![project()], true)),
    });

    assert!(matches!(
        app.update(key(KeyCode::Char('n'))),
        Some(Action::LoadProjects { page: 2 })
    ));
    assert!(app.update(key(KeyCode::Char('p'))).is_none());
    assert_eq!(app.board.text(), Some("Already on the first page"));
}

#[test]
fn test_project_loaded_switches_to_form() {
    let app = app_with_form();
    assert_eq!(app.screen, Screen::ProjectForm);
    let form = app.form.as_ref().unwrap();
    assert_eq!(form.container, format!("#{ID}"));
    assert_eq!(form.focus, FormField::Name);
}

#[test]
fn test_focus_wraps() {
    assert_eq!(FormField::Active.next(), FormField::Name);
    assert_eq!(FormField::Name.prev(), FormField::Active);
}

#[test]
fn test_edit_name_then_save_request() {
    let mut app = app_with_form();
    app.update(key(KeyCode::Enter));
    assert_eq!(app.input_mode, InputMode::EditingName);

    app.update(Action::Input(KeyEvent::new(
        KeyCode::Char('u'),
        KeyModifiers::CONTROL,
    )));
    for c in "Back Room".chars() {
        app.update(key(KeyCode::Char(c)));
    }
    app.update(key(KeyCode::Enter));
    assert_eq!(app.input_mode, InputMode::Normal);

    let out = app.update(key(KeyCode::Char('s')));
    match out {
        Some(Action::SaveProject(request)) => {
            assert_eq!(request.public_id, ID);
            assert_eq!(request.update.name.as_deref(), Some("Back Room"));
            assert_eq!(request.image, None);
        }
        other => panic!("expected SaveProject, got {other:?}"),
    }
    assert_eq!(app.form.as_ref().unwrap().saves_in_flight, 1);
    assert_eq!(app.board.text(), Some("Saving Back Room..."));
}

#[test]
fn test_save_without_changes_is_skipped() {
    let mut app = app_with_form();
    assert!(app.update(key(KeyCode::Char('s'))).is_none());
    assert_eq!(app.board.text(), Some("No changes to save"));
}

#[test]
fn test_overlapping_saves_are_both_sent() {
    let mut app = app_with_form();
    app.form.as_mut().unwrap().editor.set_name("Other");
    assert!(matches!(
        app.update(key(KeyCode::Char('s'))),
        Some(Action::SaveProject(_))
    ));
    assert!(matches!(
        app.update(key(KeyCode::Char('s'))),
        Some(Action::SaveProject(_))
    ));
    assert_eq!(app.form.as_ref().unwrap().saves_in_flight, 2);
    assert_eq!(app.pending, 2);
}

#[test]
fn test_cycle_string_valued_choices() {
    let mut fields = HashMap::new();
    fields.insert(
        "public".to_string(),
        FieldDescriptor {
            choices: vec![
                FieldChoice {
                    value: json!("True"),
                    display_name: "Yes".to_string(),
                },
                FieldChoice {
                    value: json!("False"),
                    display_name: "No".to_string(),
                },
            ],
            ..Default::default()
        },
    );
    let context = ViewContext::new(
        Arc::new(FieldMetadata::new(fields)),
        Arc::new(context().inventory_types().to_vec()),
    );
    let mut app = app();
    app.update(Action::ProjectLoaded(Ok((project(), context))));
    app.form.as_mut().unwrap().focus = FormField::Public;

    app.update(key(KeyCode::Right));

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.editor.draft().public, Some(false));
    let view = form.view();
    let public = view.fields.iter().find(|f| f.field == "public").unwrap();
    assert_eq!(public.selected().map(|o| o.text.as_str()), Some("No"));
}

#[test]
fn test_cycle_inventory_type_sends_href() {
    let mut app = app_with_form();
    app.update(key(KeyCode::Tab));
    app.update(key(KeyCode::Right));

    let form = app.form.as_ref().unwrap();
    assert_eq!(
        form.editor.draft().inventory_type.as_deref(),
        Some("http://localhost/api/inventory-types/FNJ3GMTTPQ6JZ7EE/")
    );
    let view = form.view();
    let selected = view.field("inventory_type").unwrap().selected().unwrap();
    assert_eq!(selected.text, "Equipment");
}

#[test]
fn test_cycle_active_uses_metadata_choices() {
    let mut app = app_with_form();
    for _ in 0..4 {
        app.update(key(KeyCode::Tab));
    }
    assert_eq!(app.form.as_ref().unwrap().focus, FormField::Active);
    app.update(key(KeyCode::Char('l')));
    assert_eq!(app.form.as_ref().unwrap().editor.draft().active, Some(false));

    let screen = screen_text(&mut app, 100, 24);
    assert!(screen.contains("[x] Inactive"));
    assert!(screen.contains("(modified)"));
}

#[test]
fn test_missing_image_file_is_rejected() {
    let mut app = app_with_form();
    app.update(key(KeyCode::Tab));
    app.update(key(KeyCode::Tab));
    app.update(key(KeyCode::Enter));
    assert_eq!(app.input_mode, InputMode::EditingImagePath);
    for c in "/no/such/logo.png".chars() {
        app.update(key(KeyCode::Char(c)));
    }
    app.update(key(KeyCode::Enter));

    assert!(app.form.as_ref().unwrap().editor.pending_image().is_none());
    assert_eq!(
        app.board.text(),
        Some("Image file not found: /no/such/logo.png")
    );
}

#[test]
fn test_existing_image_file_is_selected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, b"png").unwrap();

    let mut app = app_with_form();
    app.form.as_mut().unwrap().focus = FormField::Image;
    app.update(key(KeyCode::Enter));
    for c in path.to_string_lossy().chars() {
        app.update(key(KeyCode::Char(c)));
    }
    app.update(key(KeyCode::Enter));

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.editor.pending_filename().as_deref(), Some("logo.png"));
    assert_eq!(app.board.text(), Some("Image selected: logo.png"));
}

#[test]
fn test_saved_outcome_updates_form_and_list() {
    let mut app = app();
    app.update(Action::ProjectsLoaded {
        page: 1,
        result: Ok(page(vec![project()], false)),
    });
    app.update(Action::ProjectLoaded(Ok((project(), context()))));
    app.form.as_mut().unwrap().editor.set_name("Back Room");
    let request = sent_save(&mut app);

    let mut saved = project();
    saved.name = "Back Room".to_string();
    app.update(Action::ProjectSaved {
        public_id: ID.to_string(),
        outcome: SaveOutcome {
            saved: Some(saved),
            error: None,
            image_uploaded: false,
            sent: request.update,
            sent_image: request.image,
        },
    });

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.saves_in_flight, 0);
    assert!(!form.editor.is_dirty());
    assert_eq!(app.board.text(), Some("Saved Back Room"));
    assert_eq!(app.projects.as_ref().unwrap()[0].name, "Back Room");
}

#[test]
fn test_edits_made_during_save_survive_its_response() {
    let mut app = app_with_form();
    app.form.as_mut().unwrap().editor.set_name("Back Room");
    let request = sent_save(&mut app);

    let form = app.form.as_mut().unwrap();
    form.editor.set_public(false);
    form.editor.choose_image("/tmp/logo.png");

    let mut saved = project();
    saved.name = "Back Room".to_string();
    app.update(Action::ProjectSaved {
        public_id: ID.to_string(),
        outcome: SaveOutcome {
            saved: Some(saved),
            error: None,
            image_uploaded: false,
            sent: request.update,
            sent_image: request.image,
        },
    });

    let editor = &app.form.as_ref().unwrap().editor;
    assert_eq!(editor.record().name, "Back Room");
    assert_eq!(editor.draft().name, None);
    assert_eq!(editor.draft().public, Some(false));
    assert_eq!(
        editor.pending_image(),
        Some(std::path::Path::new("/tmp/logo.png"))
    );
    assert!(editor.is_dirty());
}

#[test]
fn test_name_changed_again_during_save_stays_in_draft() {
    let mut app = app_with_form();
    app.form.as_mut().unwrap().editor.set_name("Back Room");
    let request = sent_save(&mut app);
    app.form.as_mut().unwrap().editor.set_name("Front Room");

    let mut saved = project();
    saved.name = "Back Room".to_string();
    app.update(Action::ProjectSaved {
        public_id: ID.to_string(),
        outcome: SaveOutcome {
            saved: Some(saved),
            error: None,
            image_uploaded: false,
            sent: request.update,
            sent_image: request.image,
        },
    });

    let editor = &app.form.as_ref().unwrap().editor;
    assert_eq!(editor.draft().name.as_deref(), Some("Front Room"));
    assert_eq!(editor.preview().name, "Front Room");
}

#[test]
fn test_rejected_save_keeps_draft() {
    let mut app = app_with_form();
    app.form.as_mut().unwrap().editor.set_name("Back Room");
    let request = sent_save(&mut app);
    app.update(Action::ProjectSaved {
        public_id: ID.to_string(),
        outcome: SaveOutcome {
            saved: None,
            error: Some(ClientError::ApiError {
                status: 400,
                url: "http://localhost/api/projects/RVB9AXBYA9JQYNZJ/".to_string(),
                message: "Bad Request".to_string(),
                detail: Some("name: This field may not be blank.".to_string()),
            }),
            image_uploaded: false,
            sent: request.update,
            sent_image: request.image,
        },
    });

    let form = app.form.as_ref().unwrap();
    assert!(form.editor.is_dirty());
    assert_eq!(form.editor.record().name, "Main Warehouse");
    let message = app.board.current().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert_eq!(message.text, "name: This field may not be blank.");
}

#[test]
fn test_save_result_for_other_project_leaves_form_alone() {
    let mut app = app_with_form();
    app.form.as_mut().unwrap().editor.set_name("Draft");
    app.update(Action::ProjectSaved {
        public_id: "OTHER".to_string(),
        outcome: SaveOutcome {
            saved: Some(Project {
                public_id: "OTHER".to_string(),
                name: "Elsewhere".to_string(),
                ..Default::default()
            }),
            error: None,
            image_uploaded: false,
            sent: ProjectUpdate::default(),
            sent_image: None,
        },
    });
    assert!(app.form.as_ref().unwrap().editor.is_dirty());
    assert_eq!(app.board.text(), Some("Saved Elsewhere"));
}

#[test]
fn test_escape_with_changes_warns_and_returns_to_list() {
    let mut app = app_with_form();
    app.form.as_mut().unwrap().editor.set_public(false);
    app.update(key(KeyCode::Esc));
    assert_eq!(app.screen, Screen::Projects);
    assert!(app.form.is_none());
    assert_eq!(app.board.text(), Some("Unsaved changes discarded"));
}

#[test]
fn test_discard_clears_draft() {
    let mut app = app_with_form();
    app.form.as_mut().unwrap().editor.set_name("Draft");
    app.update(key(KeyCode::Char('d')));
    assert!(!app.form.as_ref().unwrap().editor.is_dirty());
}

#[test]
fn test_ctrl_c_quits_from_edit_mode() {
    let mut app = app_with_form();
    app.update(key(KeyCode::Enter));
    app.update(Action::Input(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(app.should_quit);
}

#[test]
fn test_q_in_edit_mode_types() {
    let mut app = app_with_form();
    app.update(key(KeyCode::Enter));
    app.update(key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert!(app.input.value().ends_with('q'));
}

#[test]
fn test_form_render_shows_fields_and_prompt() {
    let mut app = app_with_form();
    app.update(key(KeyCode::Enter));
    let screen = screen_text(&mut app, 100, 30);
    assert!(screen.contains(&format!("Project #{ID}")));
    assert!(screen.contains("Main Warehouse"));
    assert!(screen.contains("[x] Stock"));
    assert!(screen.contains("[ ] Equipment"));
    assert!(screen.contains("Name (Enter to apply, Esc to cancel)"));
    assert!(screen.contains("Enter apply"));
}

#[test]
fn test_list_render_shows_footer_message() {
    let mut app = app();
    app.board.error("Failed to load projects: Not found.");
    let screen = screen_text(&mut app, 100, 12);
    assert!(screen.contains("ERR: Failed to load projects: Not found."));
    assert!(screen.contains("q quit"));
}
