use std::path::PathBuf;

use clap::{Parser, Subcommand};
use join_client::{
    domain::{
        models::{join_form::AvatarFile, session::RenderContext},
        services::navigation_service::{Navigator, Route},
        validation::Field,
    },
    infrastructure::{
        config::ClientConfig, http_api::HttpApi, image_repository::HttpImageRepository,
        user_repository::HttpUserRepository,
    },
    presentation::{
        messages::descriptor,
        pages::{
            current_user::CurrentUser,
            join_page::{JoinPage, SubmitOutcome},
        },
    },
    usecase::{register_user_usecase::RegisterUserUsecase, session_usecase::SessionUsecase},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "join-client")]
#[command(about = "Register an account and inspect the current session")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the registration form and submit it
    Join {
        #[arg(long)]
        username: String,
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Image to use as profile picture
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Show the logged in user
    Session,
}

/// Terminal stand-in for client-side routing
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn push(&self, route: &Route) {
        info!(%route, "navigating");
        println!("-> {route}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    let api = HttpApi::new(&config)?;
    let user_repository = HttpUserRepository::new(api.clone());

    match cli.command {
        Commands::Join {
            username,
            user_id,
            password,
            confirm_password,
            email,
            phone,
            location,
            avatar,
        } => {
            let usecase =
                RegisterUserUsecase::new(user_repository, HttpImageRepository::new(api));
            let page = JoinPage::new(usecase, ConsoleNavigator, config.login_route.clone())?;

            page.set_value(Field::Username, username);
            page.set_value(Field::UserId, user_id);
            page.set_value(Field::Password, password);
            page.set_value(Field::ConfirmPassword, confirm_password);
            page.set_value(Field::Email, email.unwrap_or_default());
            page.set_value(Field::Phone, phone.unwrap_or_default());
            page.set_value(Field::Location, location.unwrap_or_default());
            if let Some(path) = avatar {
                page.select_avatar(Some(AvatarFile::from_path(path).await?));
            }

            println!("[{}]", page.title());
            let outcome = tokio::select! {
                outcome = page.submit() => outcome,
                _ = tokio::signal::ctrl_c() => {
                    page.teardown();
                    SubmitOutcome::Cancelled
                }
            };

            let state = page.state();
            if let Some(message) = &state.message {
                println!("{message}");
            }
            if let Some(error_message) = &state.error_message {
                eprintln!("{error_message}");
            }
            for (field, message) in &state.errors {
                let label = descriptor(*field).map_or(field.name(), |d| d.label);
                eprintln!("{label}: {message}");
            }
            if outcome == SubmitOutcome::Cancelled {
                eprintln!("cancelled");
            }
        }
        Commands::Session => {
            let current = CurrentUser::new(
                SessionUsecase::new(user_repository),
                RenderContext::Interactive,
            );
            let state = current.refresh().await;
            match state.logged_in_user() {
                Some(user) => println!("{} ({})", user.username(), user.user_id().as_str()),
                None if state.is_logged_in() == Some(false) => println!("not logged in"),
                None => println!("session unavailable"),
            }
        }
    }

    Ok(())
}
