use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use fabplan_core::{DomainError, DomainResult, OrderId, TeamId};

/// Working shift a team is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Day,
    Night,
}

/// A production team on the shop floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub shift: Shift,
    pub members: Vec<String>,
    /// Order the team is currently working, if any.
    pub assigned_order: Option<OrderId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub shift: Shift,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub shift: Option<Shift>,
    pub members: Option<Vec<String>>,
    /// `Some(None)` clears the assignment.
    pub assigned_order: Option<Option<OrderId>>,
}

/// In-memory team store, seeded with demo teams.
#[derive(Debug, Default)]
pub struct TeamStore {
    inner: Mutex<Vec<Team>>,
}

impl TeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let store = Self::new();
        for (i, shift) in [Shift::Day, Shift::Day, Shift::Night].iter().enumerate() {
            let n = i + 1;
            let _ = store.create(NewTeam {
                name: format!("Assembly Team {n}"),
                shift: *shift,
                members: (1..=4).map(|m| format!("operator-{n}{m}")).collect(),
            });
        }
        store
    }

    pub fn list(&self) -> Vec<Team> {
        self.inner.lock().unwrap().clone()
    }

    pub fn get(&self, id: TeamId) -> Option<Team> {
        self.inner.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }

    pub fn create(&self, new: NewTeam) -> DomainResult<Team> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("team name must not be empty"));
        }

        let team = Team {
            id: TeamId::new(),
            name: new.name,
            shift: new.shift,
            members: new.members,
            assigned_order: None,
        };
        self.inner.lock().unwrap().push(team.clone());
        Ok(team)
    }

    pub fn update(&self, id: TeamId, update: TeamUpdate) -> DomainResult<Team> {
        let mut teams = self.inner.lock().unwrap();
        let team = teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("team name must not be empty"));
            }
            team.name = name;
        }
        if let Some(shift) = update.shift {
            team.shift = shift;
        }
        if let Some(members) = update.members {
            team.members = members;
        }
        if let Some(assigned_order) = update.assigned_order {
            team.assigned_order = assigned_order;
        }
        Ok(team.clone())
    }

    pub fn delete(&self, id: TeamId) -> DomainResult<()> {
        let mut teams = self.inner.lock().unwrap();
        let before = teams.len();
        teams.retain(|t| t.id != id);
        if teams.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
