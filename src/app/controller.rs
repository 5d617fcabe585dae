use std::path::Path;

use log::{info, warn};

use crate::app::state::ShowcaseState;
use crate::error::{AppError, Result};
use crate::fetch::users_table;
use crate::records::stats::age_column;
use crate::records::upload::preview;
use crate::ui::{
    run_about, run_charts, run_fetch_progress, run_form, run_main_menu, run_media, run_order,
    run_table_view, run_upload_picker, run_welcome, show_notice, MenuAction, NoticeKind,
    TableView, UploadPicker,
};

/// Coordinates session state and the TUI screens.
pub struct AppController {
    state: ShowcaseState,
}

impl AppController {
    pub fn new(state: ShowcaseState) -> Self {
        Self { state }
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            match run_main_menu(self.state.order_item_count())? {
                MenuAction::Welcome => run_welcome(self.state.matrix_mut())?,
                MenuAction::Users => self.handle_users().await?,
                MenuAction::Upload => self.handle_upload()?,
                MenuAction::Charts => run_charts()?,
                MenuAction::Form => {
                    let root = self.state.workspace().root().to_path_buf();
                    run_form(self.state.form_mut(), &root)?
                }
                MenuAction::Order => {
                    let (catalog, selection) = self.state.order_parts();
                    run_order(catalog, selection)?;
                }
                MenuAction::Media => run_media(
                    &self.state.config().media,
                    self.state.workspace().root(),
                )?,
                MenuAction::About => run_about()?,
                MenuAction::Exit => {
                    info!("Exiting Data Showcase");
                    return Ok(());
                }
            }
        }
    }

    /// Fetch the remote users. Request failures become a notice; no table is shown for them.
    async fn handle_users(&self) -> Result<()> {
        let client = self.state.users();
        match run_fetch_progress(client).await {
            Ok(Ok(users)) => {
                let table = users_table(&users);
                let mut view = TableView::new(table, "Data Pengguna dari API")
                    .with_subtitle(format!("{} pengguna dari {}", users.len(), client.endpoint()));
                run_table_view(&mut view)
            }
            Ok(Err(err)) => show_notice(NoticeKind::Error, "API Users", &err.to_string()),
            Err(AppError::Cancelled) => show_notice(
                NoticeKind::Info,
                "API Users",
                "Pengambilan data dibatalkan.",
            ),
            Err(err) => Err(err),
        }
    }

    /// Pick a file from the uploads folder and preview it with optional age statistics.
    fn handle_upload(&self) -> Result<()> {
        let workspace = self.state.workspace();
        let policy = self.state.policy();
        let files = workspace.upload_candidates(policy);
        let mut picker = UploadPicker::new(
            files,
            workspace.uploads_dir().display().to_string(),
            policy.describe(),
        );

        let Some(path) = run_upload_picker(&mut picker)? else {
            return Ok(());
        };

        match preview(&path, policy) {
            Ok(loaded) => {
                let column = age_column(&loaded.table).map(str::to_string);
                let mut view = TableView::new(loaded.table, "Data dari File")
                    .with_subtitle(file_label(&loaded.path));
                if let (Some(column), Some(stats)) = (column, loaded.age_stats) {
                    view = view.with_stats(column, stats);
                }
                run_table_view(&mut view)
            }
            Err(err) => {
                warn!("Upload preview failed for {}: {}", path.display(), err);
                show_notice(NoticeKind::Error, "Upload File", &err.to_string())
            }
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
