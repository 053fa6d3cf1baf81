//! Editing state for the camera list: the committed cameras and the one open in the editor.

use crate::camera::{Camera, CameraEdit};
use crate::constants::NO_SELECTION_ID;
use crate::error::CameraError;
use crate::geojson::FeatureCollection;
use crate::sector::build_sector_collection;

/// Committed camera list plus the camera currently open in the editor.
///
/// The edit slot holds a copy: slider drags update it without touching the
/// committed list, and the map draws [`EditorSession::rendered_cameras`] so
/// the change is visible immediately. `commit` upserts the copy by id,
/// `cancel` drops it.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    cameras: Vec<Camera>,
    selected: Option<Camera>,
}

impl EditorSession {
    pub fn new(cameras: Vec<Camera>) -> Self {
        Self {
            cameras,
            selected: None,
        }
    }

    /// Replace the committed list, e.g. after a fresh fetch. The edit slot is kept.
    pub fn set_cameras(&mut self, cameras: Vec<Camera>) {
        log::debug!("session: replacing {} cameras with {}", self.cameras.len(), cameras.len());
        self.cameras = cameras;
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn selected(&self) -> Option<&Camera> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, id: i64) -> Result<&Camera, CameraError> {
        let camera = self
            .cameras
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CameraError::UnknownCamera(id))?;
        log::debug!("session: selected camera {id}");
        Ok(&*self.selected.insert(camera))
    }

    /// Open a new camera at the clicked map position. Its id is one past the
    /// highest committed id, so it never matches a committed camera.
    pub fn place_new_camera(&mut self, longitude: f64, latitude: f64) -> &Camera {
        let id = self.cameras.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        log::debug!("session: placing new camera {id} at ({longitude}, {latitude})");
        self.selected.insert(Camera::new_at(id, longitude, latitude))
    }

    /// Update the edit slot. Does nothing when no camera is open.
    pub fn apply_edit(&mut self, edit: CameraEdit) {
        if let Some(camera) = self.selected.as_mut() {
            camera.apply(edit);
        }
    }

    /// Upsert the edit slot into the committed list and close the editor.
    pub fn commit(&mut self) -> Option<Camera> {
        let camera = self.selected.take()?;
        match self.cameras.iter_mut().find(|c| c.id == camera.id) {
            Some(existing) => *existing = camera.clone(),
            None => self.cameras.push(camera.clone()),
        }
        log::debug!("session: committed camera {}", camera.id);
        Some(camera)
    }

    pub fn cancel(&mut self) {
        if let Some(camera) = self.selected.take() {
            log::debug!("session: discarded edits to camera {}", camera.id);
        }
    }

    pub fn remove(&mut self, id: i64) -> Result<Camera, CameraError> {
        let index = self
            .cameras
            .iter()
            .position(|c| c.id == id)
            .ok_or(CameraError::UnknownCamera(id))?;
        if self.selected.as_ref().is_some_and(|c| c.id == id) {
            self.selected = None;
        }
        log::debug!("session: removed camera {id}");
        Ok(self.cameras.remove(index))
    }

    /// Committed cameras with the edit slot merged in: replacing its
    /// committed counterpart, or appended when it is new.
    pub fn rendered_cameras(&self) -> Vec<Camera> {
        let mut out = self.cameras.clone();
        if let Some(selected) = &self.selected {
            match out.iter_mut().find(|c| c.id == selected.id) {
                Some(existing) => *existing = selected.clone(),
                None => out.push(selected.clone()),
            }
        }
        out
    }

    pub fn sector_collection(&self) -> FeatureCollection {
        build_sector_collection(&self.rendered_cameras())
    }

    pub fn highlight_id(&self) -> i64 {
        self.selected.as_ref().map_or(NO_SELECTION_ID, |c| c.id)
    }
}
