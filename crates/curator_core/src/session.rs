use url::Url;

use crate::records::SessionUser;

const AVATAR_HOST: &str = "https://avatar.vercel.sh/";
const ANONYMOUS_INITIALS: &str = "NN";

/// Authentication state handed to the views that need it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub user: Option<SessionUser>,
    pub signing_out: bool,
}

impl SessionContext {
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            signing_out: false,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Entries of the profile dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    Profile,
    Settings,
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileMenuView {
    pub initials: String,
    pub avatar_url: String,
    pub sign_out_label: &'static str,
    pub sign_out_enabled: bool,
}

impl ProfileMenuView {
    pub fn from_session(session: &SessionContext) -> Self {
        let name = session
            .user
            .as_ref()
            .map(|user| user.name.as_str())
            .filter(|name| !name.is_empty());
        let initials = match name {
            Some(name) => name.chars().take(2).collect::<String>().to_uppercase(),
            None => ANONYMOUS_INITIALS.to_string(),
        };

        Self {
            avatar_url: avatar_url(name.unwrap_or("user"), &initials),
            initials,
            sign_out_label: if session.signing_out {
                "Signing out..."
            } else {
                "Sign out"
            },
            sign_out_enabled: !session.signing_out,
        }
    }
}

fn avatar_url(name: &str, initials: &str) -> String {
    Url::parse(AVATAR_HOST)
        .map(|mut url| {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.clear().push(&format!("{name}.svg"));
            }
            url.query_pairs_mut().append_pair("text", initials);
            url.to_string()
        })
        .unwrap_or_default()
}
