//! User table operations.

use super::{next_id, Tables};
use crate::errors::UserError;
use crate::models::{User, UserCreate, UserUpdate};

pub fn list(tables: &Tables) -> Vec<User> {
    tables.users.clone()
}

pub fn get(tables: &Tables, user_id: i64) -> Result<User, UserError> {
    tables
        .users
        .iter()
        .find(|u| u.id == user_id)
        .cloned()
        .ok_or(UserError::UserNotFound)
}

pub fn exists(tables: &Tables, user_id: i64) -> bool {
    tables.users.iter().any(|u| u.id == user_id)
}

/// Insert a user, rejecting an email already in use.
pub fn create(tables: &mut Tables, new_user: UserCreate) -> Result<User, UserError> {
    if tables.users.iter().any(|u| u.email == new_user.email) {
        return Err(UserError::EmailExists);
    }

    let user = User {
        id: next_id(tables.users.iter().map(|u| u.id)),
        name: new_user.name,
        email: new_user.email,
    };
    tables.users.push(user.clone());

    Ok(user)
}

/// Apply a partial update. Empty strings are ignored.
pub fn update(tables: &mut Tables, user_id: i64, update: UserUpdate) -> Result<User, UserError> {
    let email = update.email.filter(|e| !e.is_empty());
    let name = update.name.filter(|n| !n.is_empty());

    if !exists(tables, user_id) {
        return Err(UserError::UserNotFound);
    }

    if let Some(email) = &email {
        if tables
            .users
            .iter()
            .any(|u| u.id != user_id && &u.email == email)
        {
            return Err(UserError::EmailExists);
        }
    }

    let user = tables
        .users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or(UserError::UserNotFound)?;

    if let Some(name) = name {
        user.name = name;
    }
    if let Some(email) = email {
        user.email = email;
    }

    Ok(user.clone())
}

pub fn delete(tables: &mut Tables, user_id: i64) -> Result<(), UserError> {
    let position = tables
        .users
        .iter()
        .position(|u| u.id == user_id)
        .ok_or(UserError::UserNotFound)?;
    tables.users.remove(position);
    Ok(())
}
