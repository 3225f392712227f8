use env_logger::Env;
use magnet::{configuration::get_configuration, startup::RootStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let root = RootStore::build(&configuration)?;

    let logged_in = root.auth.check_auth_status().await;
    if !logged_in {
        log::warn!("No active backend session; log in before using the dashboard");
    }

    root.projects.load_projects().await;
    let projects = root.projects.state();
    log::info!(
        "Loaded {} projects, selected: {}",
        projects.projects.len(),
        projects
            .selected_project
            .map(|p| p.project_name)
            .unwrap_or_else(|| "none".to_string())
    );

    Ok(())
}
