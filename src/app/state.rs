use crate::config::Config;
use crate::error::Result;
use crate::fetch::UsersClient;
use crate::records::form::FormDraft;
use crate::records::matrix::MatrixGenerator;
use crate::records::{summarize, AcceptPolicy, Catalog, QuantitySelection, Workspace};

/// Runtime data shared across screens for the lifetime of the session.
pub struct ShowcaseState {
    config: Config,
    workspace: Workspace,
    policy: AcceptPolicy,
    users: UsersClient,
    catalog: Catalog,
    selection: QuantitySelection,
    form: FormDraft,
    matrix: MatrixGenerator,
}

impl ShowcaseState {
    pub fn new(config: Config, workspace: Workspace) -> Result<Self> {
        let users = UsersClient::new(&config.api)?;
        let policy = AcceptPolicy::new(&config.accepted_extensions);
        let matrix = MatrixGenerator::new(config.matrix_seed);
        Ok(Self {
            config,
            workspace,
            policy,
            users,
            catalog: Catalog::thrift(),
            selection: QuantitySelection::new(),
            form: FormDraft::starting_now(),
            matrix,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn policy(&self) -> &AcceptPolicy {
        &self.policy
    }

    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    pub fn form_mut(&mut self) -> &mut FormDraft {
        &mut self.form
    }

    pub fn matrix_mut(&mut self) -> &mut MatrixGenerator {
        &mut self.matrix
    }

    /// Catalog and the mutable selection, borrowed together for the order screen.
    pub fn order_parts(&mut self) -> (&Catalog, &mut QuantitySelection) {
        (&self.catalog, &mut self.selection)
    }

    /// Number of distinct items with a positive quantity.
    pub fn order_item_count(&self) -> usize {
        summarize(&self.catalog, &self.selection).lines().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Quantity;

    #[test]
    fn order_count_tracks_selection() {
        let config = Config::builtin();
        let workspace = Workspace::from_config(std::env::temp_dir(), &config);
        let mut state = ShowcaseState::new(config, workspace).expect("state");
        assert_eq!(state.order_item_count(), 0);

        let (_, selection) = state.order_parts();
        selection.set("Kaos Vintage", Quantity::new(2));
        selection.set("Sepatu Kets", Quantity::new(1));
        assert_eq!(state.order_item_count(), 2);
        assert!(state.policy().accepts(std::path::Path::new("data.XLSX")));
    }
}
