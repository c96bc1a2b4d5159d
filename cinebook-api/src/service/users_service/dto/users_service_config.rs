#[derive(Debug, Clone, Default)]
pub struct UsersServiceConfig {
    ///
    /// Users registered with these emails become super admins.
    /// Emails are stored lowercase.
    ///
    pub super_admin_emails: Vec<String>,
}
