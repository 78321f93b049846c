use sqlx::PgPool;
use tracing::{error, info, instrument, warn};
use zambool_auth::create_access_token;
use zambool_config::JwtConfig;
use zambool_core::{AppError, hash_password, verify_password};
use zambool_models::users::UserWithPassword;
use zambool_models::{
    Claims, LoginRequest, LoginResponse, LoginUser, SessionResponse, SignupRequest, User, UserId,
    UserRole,
};

use crate::metrics;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(user.username = %dto.username, user.role = %dto.role, db.operation = "INSERT", db.table = "users"))]
    pub async fn signup(db: &PgPool, dto: SignupRequest) -> Result<User, AppError> {
        if dto.role == UserRole::Admin {
            warn!("Rejected self-service admin signup");
            return Err(AppError::forbidden(
                "Admin accounts can only be created from the CLI".to_string(),
            ));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, name, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, name, role, created_at, updated_at",
        )
        .bind(&dto.username)
        .bind(&hashed_password)
        .bind(dto.name.trim())
        .bind(dto.role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!("Attempted to sign up with existing username");
                return AppError::conflict(anyhow::anyhow!("User already exists"));
            }
            error!(error = %e, "Database error creating user");
            AppError::database(e)
        })?;

        metrics::track_user_signup(user.role.as_str());
        info!(user.id = %user.id, "User created");

        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config), fields(user.username = %dto.username))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(user) = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, name, role, password FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await?
        else {
            metrics::track_user_login_failure("unknown_user");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !verify_password(&dto.password, &user.password)? {
            metrics::track_user_login_failure("wrong_password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = create_access_token(
            user.id.into_inner(),
            &user.username,
            &user.name,
            user.role.as_str(),
            jwt_config,
        )?;

        metrics::track_jwt_issued();
        metrics::track_user_login_success(user.role.as_str());
        info!(user.id = %user.id, "User logged in");

        Ok(LoginResponse {
            user: LoginUser {
                id: user.id,
                username: user.username,
                name: user.name,
                role: user.role,
            },
            message: "Login successful".to_string(),
            token,
        })
    }

    /// Describes the holder of an already verified token.
    pub fn session(claims: &Claims) -> Result<SessionResponse, AppError> {
        let invalid = || AppError::forbidden("Invalid or expired token".to_string());

        let id: UserId = claims.sub.parse().map_err(|_| invalid())?;
        let role: UserRole = claims.role.parse().map_err(|_| invalid())?;
        let expires_at = i64::try_from(claims.exp)
            .ok()
            .and_then(|exp| chrono::DateTime::from_timestamp(exp, 0))
            .ok_or_else(invalid)?;

        Ok(SessionResponse {
            user: LoginUser {
                id,
                username: claims.username.clone(),
                name: claims.name.clone(),
                role,
            },
            home: role.home_view(),
            views: role.views(),
            expires_at,
        })
    }
}
