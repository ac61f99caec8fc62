//! Card Repository
//!
//! `Board` owns the ordered projects and is the source of truth for the
//! display. Every mutation ends with a full snapshot write, except
//! `move_project`, which is the visual move of a drag in progress; the drag
//! end calls `persist`.

use std::collections::HashSet;

use crate::error::BoardResult;
use crate::models::{Project, ProjectFile};
use crate::store::{BoardStore, KeyValueStore};

#[derive(Debug, Clone)]
pub struct Board<S> {
    projects: Vec<Project>,
    store: BoardStore<S>,
}

impl<S: KeyValueStore> Board<S> {
    /// Restore the board from storage.
    ///
    /// Ids that are zero or repeat an earlier project are reassigned so the
    /// loaded board always has unique positive ids.
    pub fn load(store: BoardStore<S>) -> Self {
        let mut projects = store.load_board();
        let reassigned = reassign_invalid_ids(&mut projects);
        if reassigned > 0 {
            log::warn!("[BOARD] Reassigned {} invalid or duplicate project ids", reassigned);
        }
        log::debug!("[BOARD] Loaded {} projects", projects.len());
        Self { projects, store }
    }

    pub fn store(&self) -> &BoardStore<S> {
        &self.store
    }

    /// Projects in display order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn project_mut(&mut self, id: u32) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.projects.iter().map(|p| p.id).collect()
    }

    /// `max(existing ids) + 1`, or `1` for an empty board. Never cached.
    ///
    /// Once `u32::MAX` is taken the smallest unused positive id is handed out.
    pub fn next_id(&self) -> u32 {
        let taken: HashSet<u32> = self.projects.iter().map(|p| p.id).collect();
        fresh_id(&taken)
    }

    /// Write the current state, in display order
    pub fn persist(&self) -> BoardResult<()> {
        self.store.save_board(&self.projects)?;
        Ok(())
    }

    // ========================
    // Cards
    // ========================

    /// Append a blank project at the end of the board
    pub fn create_project(&mut self) -> BoardResult<u32> {
        self.create_project_with("", "")
    }

    pub fn create_project_with(&mut self, name: &str, task: &str) -> BoardResult<u32> {
        let id = self.next_id();
        self.projects.push(Project::new(id, name, task));
        log::debug!("[BOARD] Created project {}", id);
        self.persist()?;
        Ok(id)
    }

    /// Remove a project together with its modal data.
    ///
    /// Unknown ids are a no-op returning `Ok(false)`; their modal data key is
    /// still cleared so nothing can linger under that id.
    pub fn delete_project(&mut self, id: u32) -> BoardResult<bool> {
        self.store.delete_modal_data(id);

        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            log::debug!("[BOARD] Delete of unknown project {} ignored", id);
            return Ok(false);
        }

        log::debug!("[BOARD] Deleted project {}", id);
        self.persist()?;
        Ok(true)
    }

    pub fn set_name(&mut self, id: u32, name: &str) -> BoardResult<bool> {
        let Some(project) = self.project_mut(id) else {
            return Ok(false);
        };
        project.name = name.to_string();
        self.persist()?;
        Ok(true)
    }

    pub fn set_task(&mut self, id: u32, task: &str) -> BoardResult<bool> {
        let Some(project) = self.project_mut(id) else {
            return Ok(false);
        };
        project.task = task.to_string();
        self.persist()?;
        Ok(true)
    }

    // ========================
    // Files
    // ========================

    /// Append a batch of files in order, then save once.
    /// An empty batch changes nothing and writes nothing.
    pub fn add_files(&mut self, id: u32, files: Vec<ProjectFile>) -> BoardResult<bool> {
        if files.is_empty() {
            return Ok(false);
        }
        let Some(project) = self.project_mut(id) else {
            log::debug!("[BOARD] Project {} vanished before its upload finished", id);
            return Ok(false);
        };
        let count = files.len();
        project.files.extend(files);
        log::debug!("[BOARD] Attached {} files to project {}", count, id);
        self.persist()?;
        Ok(true)
    }

    pub fn remove_file(&mut self, id: u32, index: usize) -> BoardResult<Option<ProjectFile>> {
        let Some(project) = self.project_mut(id) else {
            return Ok(None);
        };
        if index >= project.files.len() {
            return Ok(None);
        }
        let removed = project.files.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    // ========================
    // Ordering
    // ========================

    /// Move a project in display order without saving.
    ///
    /// `before = None` moves it to the end. Returns whether the order changed.
    pub fn move_project(&mut self, id: u32, before: Option<u32>) -> bool {
        if before == Some(id) {
            return false;
        }
        let Some(from) = self.projects.iter().position(|p| p.id == id) else {
            return false;
        };
        let target = match before {
            Some(before_id) => match self.projects.iter().position(|p| p.id == before_id) {
                Some(pos) => Some(pos),
                None => return false,
            },
            None => None,
        };

        // Already in place
        match target {
            Some(pos) if pos == from + 1 => return false,
            None if from + 1 == self.projects.len() => return false,
            _ => {}
        }

        let project = self.projects.remove(from);
        let insert_at = match target {
            Some(pos) if pos > from => pos - 1,
            Some(pos) => pos,
            None => self.projects.len(),
        };
        self.projects.insert(insert_at, project);
        true
    }
}

fn reassign_invalid_ids(projects: &mut [Project]) -> usize {
    let mut taken = HashSet::new();
    let invalid: Vec<usize> = projects
        .iter()
        .enumerate()
        .filter(|(_, p)| p.id == 0 || !taken.insert(p.id))
        .map(|(index, _)| index)
        .collect();

    for &index in &invalid {
        let id = fresh_id(&taken);
        taken.insert(id);
        projects[index].id = id;
    }
    invalid.len()
}

/// `max + 1`, falling back to the smallest free positive id at the top of the range
fn fresh_id(taken: &HashSet<u32>) -> u32 {
    let max = taken.iter().copied().max().unwrap_or(0);
    max.checked_add(1).unwrap_or_else(|| {
        // Every positive id taken would need more memory than a board can hold
        (1..=u32::MAX).find(|id| !taken.contains(id)).unwrap_or(u32::MAX)
    })
}
