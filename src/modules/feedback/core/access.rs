// Shared secret checks for admin mode and deletion.
//
// An unset secret disables the capability it guards; an empty candidate never matches.

#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    admin_key: Option<String>,
    delete_key: Option<String>,
}

impl AccessPolicy {
    pub fn new(admin_key: Option<String>, delete_key: Option<String>) -> Self {
        Self {
            admin_key: admin_key.filter(|k| !k.is_empty()),
            delete_key: delete_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn is_admin(&self, candidate: Option<&str>) -> bool {
        matches_secret(self.admin_key.as_deref(), candidate)
    }

    pub fn accepts_delete_key(&self, candidate: &str) -> bool {
        matches_secret(self.delete_key.as_deref(), Some(candidate))
    }

    pub fn admin_enabled(&self) -> bool {
        self.admin_key.is_some()
    }
}

fn matches_secret(secret: Option<&str>, candidate: Option<&str>) -> bool {
    match (secret, candidate) {
        (Some(secret), Some(candidate)) => secret == candidate,
        _ => false,
    }
}
