use clan_session::{appstate, roles, session::RoleOverride};

#[tokio::main]
async fn main() {
    env_logger::init();

    let app_state = appstate::new_real_appstate().expect("can create app state");

    let mut effective = app_state.store.subscribe_effective_user();
    let watcher = tokio::spawn(async move {
        while effective.changed().await.is_ok() {
            match effective.borrow_and_update().as_ref() {
                Some(user) => println!(
                    "effective user: {} (role {}, admin {})",
                    user.display_name(),
                    user.highest_role.as_deref().unwrap_or("none"),
                    user.is_admin
                ),
                None => println!("effective user: none"),
            }
        }
    });

    match std::env::args().nth(1).as_deref() {
        Some("login") => {
            app_state.login();
            return;
        }
        Some("logout") => {
            app_state.fetch_user().await;
            app_state.logout().await;
        }
        Some("preview") => {
            app_state.fetch_user().await;
            let role = std::env::args().nth(2);
            app_state.store.set_role_override(Some(
                RoleOverride::default()
                    .is_admin(false)
                    .highest_role(role.as_deref()),
            ));
        }
        _ => app_state.fetch_user().await,
    }

    if let Some(user) = app_state.store.user() {
        println!("{}", serde_json::to_string_pretty(&user).unwrap());
        println!(
            "can manage the clan: {}",
            roles::has_required_role(user.highest_role.as_deref(), "coleader")
        );
    }

    drop(app_state);
    let _ = watcher.await;
}
