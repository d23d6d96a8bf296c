pub mod extract;

use axum::Json;
use axum::extract::State;
use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::db::{DbSession, repository};
use crate::error::AppError;
use crate::models::Course;
use crate::state::AppState;

pub use extract::CourseJson;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/courses/", get(list_courses).post(create_course))
        .route("/courses/unique/", post(create_unique_course))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_courses(mut session: DbSession) -> Result<Json<Vec<Course>>, AppError> {
    let courses = repository::fetch_courses(&mut session).await?;
    debug!("listed {} courses", courses.len());
    Ok(Json(courses))
}

/// Inserts without looking first; a duplicate id fails in storage and
/// comes back as a 500. The session is opened only once the body decodes.
async fn create_course(
    State(state): State<AppState>,
    CourseJson(req): CourseJson<Course>,
) -> Result<Json<Course>, AppError> {
    let mut session = DbSession::acquire(&state).await?;
    let course = repository::insert_course(&mut session, &req).await?;
    info!("created course {}", course.id);
    Ok(Json(course))
}

/// Rejects a taken id with a 400. The lookup and the insert are separate
/// statements, so two racing requests can both pass the lookup; the loser
/// then fails in storage with a 500.
async fn create_unique_course(
    State(state): State<AppState>,
    CourseJson(req): CourseJson<Course>,
) -> Result<Json<Course>, AppError> {
    let mut session = DbSession::acquire(&state).await?;
    if repository::find_course_by_id(&mut session, req.id).await?.is_some() {
        return Err(AppError::BadRequest("Course with this ID already exists.".to_string()));
    }

    let course = repository::insert_course(&mut session, &req).await?;
    info!("created course {}", course.id);
    Ok(Json(course))
}
