//! Staff directory page.

use crate::models::{ContentKind, StaffMember};
use crate::services::ContentRepository;
use crate::services::content::list_typed;
use crate::utils::{console, mailto_href, tel_href};

#[derive(Debug, Clone, Default)]
pub struct StaffPage {
    pub members: Vec<StaffMember>,
}

impl StaffPage {
    /// Load every staff file; a failed listing yields an empty directory.
    pub async fn load(repo: &dyn ContentRepository) -> Self {
        let members = list_typed(repo, ContentKind::Staff)
            .await
            .unwrap_or_else(|e| {
                log::warn!("Error loading staff: {}", e);
                Vec::new()
            });
        Self { members }
    }

    pub fn render(&self) {
        console::header("Library Staff");
        if self.members.is_empty() {
            console::line("No staff members listed.");
            return;
        }
        for member in &self.members {
            console::section(&member.name);
            console::line(&member.position);
            if !member.department.is_empty() {
                console::line(&member.department);
            }
            if let Some(email) = &member.email {
                console::sub_item(&format!("{email} ({})", mailto_href(email)));
            }
            if let Some(phone) = &member.phone {
                console::sub_item(&format!("{phone} ({})", tel_href(phone)));
            }
            if let Some(bio) = &member.bio {
                console::line(bio);
            }
        }
    }
}
