//! The two-panel container and its builder
//!
//! A container always holds exactly two children: the menu panel first, the
//! content panel second. The builder rejects anything else at setup time.

use serde::{Deserialize, Serialize};

/// Which of the two panels a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelRole {
    /// Static panel behind the content, never moves
    Menu,
    /// Mobile panel in front, slides between 0 and the menu height
    Content,
}

/// A measured panel inside the container
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub role: PanelRole,
    pub label: String,
    /// Measured height in pixels
    pub height: i32,
    /// Current vertical offset in pixels (always 0 for the menu)
    pub offset: i32,
}

impl Panel {
    fn new(role: PanelRole, child: ChildView) -> Self {
        Self {
            role,
            label: child.label,
            height: child.measured_height,
            offset: 0,
        }
    }
}

/// A child as handed over by the host's view hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildView {
    pub label: String,
    pub measured_height: i32,
}

impl ChildView {
    pub fn new(label: impl Into<String>, measured_height: i32) -> Self {
        Self {
            label: label.into(),
            measured_height,
        }
    }
}

/// Errors that make a container unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The container must hold exactly a menu and a content panel
    WrongChildCount { found: usize },
    /// A child reported a negative measured height
    NegativeHeight { label: String, height: i32 },
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongChildCount { found } => write!(
                f,
                "drag container needs exactly two children (menu, content), found {}",
                found
            ),
            Self::NegativeHeight { label, height } => {
                write!(f, "child '{}' has negative height {}", label, height)
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Collects children and validates them into a [`Container`]
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    children: Vec<ChildView>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child; the first becomes the menu, the second the content
    pub fn child(mut self, label: impl Into<String>, measured_height: i32) -> Self {
        self.children.push(ChildView::new(label, measured_height));
        self
    }

    /// Append several children at once
    pub fn children(mut self, children: impl IntoIterator<Item = ChildView>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Result<Container, ContainerError> {
        if self.children.len() != 2 {
            return Err(ContainerError::WrongChildCount {
                found: self.children.len(),
            });
        }

        if let Some(bad) = self.children.iter().find(|c| c.measured_height < 0) {
            return Err(ContainerError::NegativeHeight {
                label: bad.label.clone(),
                height: bad.measured_height,
            });
        }

        let mut children = self.children.into_iter();
        let (Some(menu), Some(content)) = (children.next(), children.next()) else {
            return Err(ContainerError::WrongChildCount { found: 0 });
        };

        Ok(Container {
            menu: Panel::new(PanelRole::Menu, menu),
            content: Panel::new(PanelRole::Content, content),
        })
    }
}

/// The validated `(menu, content)` pair
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    menu: Panel,
    content: Panel,
}

impl Container {
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    pub fn menu(&self) -> &Panel {
        &self.menu
    }

    pub fn content(&self) -> &Panel {
        &self.content
    }

    pub fn panel(&self, role: PanelRole) -> &Panel {
        match role {
            PanelRole::Menu => &self.menu,
            PanelRole::Content => &self.content,
        }
    }

    /// How far the content can travel; also the menu's visible extent
    pub fn menu_height(&self) -> i32 {
        self.menu.height
    }

    pub fn content_offset(&self) -> i32 {
        self.content.offset
    }

    /// Move the content panel; callers clamp before writing
    pub fn set_content_offset(&mut self, offset: i32) {
        debug_assert!(
            (0..=self.menu.height).contains(&offset),
            "content offset {} outside [0, {}]",
            offset,
            self.menu.height
        );
        self.content.offset = offset;
    }

    /// Topmost panel under a container-local y coordinate
    ///
    /// The content panel is drawn in front, so it wins wherever it covers the
    /// point. The menu is only hit in the strip the content has uncovered.
    pub fn panel_at(&self, y: f32) -> Option<PanelRole> {
        if y < 0.0 {
            return None;
        }
        if y >= self.content.offset as f32 {
            return Some(PanelRole::Content);
        }
        if y < self.menu.height as f32 {
            return Some(PanelRole::Menu);
        }
        None
    }

    /// Apply a new measurement from the host's layout pass
    ///
    /// Returns the content offset re-clamped into the new range.
    pub fn remeasure(&mut self, menu_height: i32, content_height: i32) -> i32 {
        self.menu.height = menu_height.max(0);
        self.content.height = content_height.max(0);
        self.content.offset = self.content.offset.clamp(0, self.menu.height);
        self.content.offset
    }
}
