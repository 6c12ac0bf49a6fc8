/// Stored customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

/// Email is fixed after creation; only name and phone can change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_changes_nothing() {
        let mut c = Customer { id: 1, email: "a@b.co".into(), full_name: "Ann Lee".into(), phone: None };
        let before = c.clone();
        c.apply(CustomerPatch::default());
        assert_eq!(c, before);
    }

    #[test]
    fn patch_sets_phone() {
        let mut c = Customer { id: 1, email: "a@b.co".into(), full_name: "Ann Lee".into(), phone: None };
        c.apply(CustomerPatch { full_name: None, phone: Some("+3805012".into()) });
        assert_eq!(c.phone.as_deref(), Some("+3805012"));
        assert_eq!(c.full_name, "Ann Lee");
    }
}
