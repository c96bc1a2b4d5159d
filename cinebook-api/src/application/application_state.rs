use super::ApplicationEnv;
use crate::{
    repository::{
        AdminRequestsRepositoryImpl, MoviesRepositoryImpl, ShowtimesRepositoryImpl,
        TheatresRepositoryImpl, TicketsRepositoryImpl, UsersRepositoryImpl,
    },
    service::{
        AdminRequestsService, AdminRequestsServiceImpl, LogMailService, MailService,
        MoviesService, MoviesServiceImpl, ShowtimesService, ShowtimesServiceImpl,
        SmtpMailService, TheatresService, TheatresServiceImpl, TicketsService,
        TicketsServiceImpl, UploadsService, UploadsServiceConfig, UploadsServiceImpl,
        UsersService, UsersServiceConfig, UsersServiceImpl,
    },
};
use anyhow::anyhow;
use axum::extract::FromRef;
use jwt_auth::JwtIssuer;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

///
/// Settings of the session cookie set on login
///
#[derive(Debug, Clone, Copy)]
pub struct CookieConfig {
    pub secure: bool,
}

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub cookie_config: CookieConfig,
    pub users_service: Arc<dyn UsersService>,
    pub movies_service: Arc<dyn MoviesService>,
    pub theatres_service: Arc<dyn TheatresService>,
    pub showtimes_service: Arc<dyn ShowtimesService>,
    pub admin_requests_service: Arc<dyn AdminRequestsService>,
    pub tickets_service: Arc<dyn TicketsService>,
    pub uploads_service: Arc<dyn UploadsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = Arc::new(UsersRepositoryImpl::new(db.clone()).await?);
    let movies_repository = Arc::new(MoviesRepositoryImpl::new(db.clone()).await?);
    let theatres_repository = Arc::new(TheatresRepositoryImpl::new(db.clone()).await?);
    let showtimes_repository = Arc::new(ShowtimesRepositoryImpl::new(db.clone()).await?);
    let tickets_repository = Arc::new(TicketsRepositoryImpl::new(db.clone()).await?);
    let admin_requests_repository = Arc::new(AdminRequestsRepositoryImpl::new(db));

    tracing::info!("creating services");
    let mail_service: Arc<dyn MailService> = match &env.smtp {
        Some(config) => {
            tracing::info!(host = %config.host, "sending mails with smtp");
            Arc::new(SmtpMailService::new(config.clone())?)
        }
        None => {
            tracing::warn!("smtp not configured, mails will only be logged");
            Arc::new(LogMailService)
        }
    };

    let jwt_algorithm = env
        .jwt_algorithms
        .first()
        .copied()
        .ok_or(anyhow!("jwt algorithms cannot be empty"))?;
    let issuer = JwtIssuer::new(env.jwt_encoding_key.clone(), jwt_algorithm, env.jwt_lifespan);
    let config = UsersServiceConfig {
        super_admin_emails: env.super_admin_emails.clone(),
    };
    let users_service = UsersServiceImpl::new(config, issuer, users_repository.clone());
    let users_service = Arc::new(users_service);

    let movies_service =
        MoviesServiceImpl::new(users_repository.clone(), movies_repository.clone());
    let movies_service = Arc::new(movies_service);

    let theatres_service =
        TheatresServiceImpl::new(users_repository.clone(), theatres_repository.clone());
    let theatres_service = Arc::new(theatres_service);

    let showtimes_service = ShowtimesServiceImpl::new(
        users_repository.clone(),
        movies_repository.clone(),
        theatres_repository.clone(),
        showtimes_repository.clone(),
        tickets_repository.clone(),
    );
    let showtimes_service = Arc::new(showtimes_service);

    let admin_requests_service =
        AdminRequestsServiceImpl::new(users_repository.clone(), admin_requests_repository);
    let admin_requests_service = Arc::new(admin_requests_service);

    let tickets_service = TicketsServiceImpl::new(
        users_repository,
        movies_repository,
        theatres_repository,
        showtimes_repository,
        tickets_repository,
        mail_service,
    );
    let tickets_service = Arc::new(tickets_service);

    let config = UploadsServiceConfig {
        directory: env.uploads_directory.clone(),
        max_download_len: env.max_http_content_len,
    };
    tokio::fs::create_dir_all(&config.directory).await?;
    let uploads_service = UploadsServiceImpl::new(config, reqwest::Client::new());
    let uploads_service = Arc::new(uploads_service);

    Ok((
        ApplicationState {
            cookie_config: CookieConfig {
                secure: env.cookie_secure,
            },
            users_service,
            movies_service,
            theatres_service,
            showtimes_service,
            admin_requests_service,
            tickets_service,
            uploads_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
