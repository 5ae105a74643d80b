use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::extract::AuthUser;
use crate::models::user::Role;

// The stats are fixed placeholders; nothing in the schema tracks activity yet.

pub async fn student(AuthUser(user): AuthUser) -> Result<Json<Value>, AppError> {
    if user.role != Role::Student {
        return Err(AppError::Forbidden("Access denied. Students only."));
    }

    Ok(Json(json!({
        "message": "Welcome to Student Dashboard",
        "user": user.name,
        "stats": {
            "courses_enrolled": 5,
            "assignments_pending": 3,
            "overall_progress": 75
        }
    })))
}

pub async fn teacher(AuthUser(user): AuthUser) -> Result<Json<Value>, AppError> {
    if user.role != Role::Teacher {
        return Err(AppError::Forbidden("Access denied. Teachers only."));
    }

    Ok(Json(json!({
        "message": "Welcome to Teacher Dashboard",
        "user": user.name,
        "stats": {
            "courses_teaching": 3,
            "total_students": 45,
            "pending_reviews": 12
        }
    })))
}
