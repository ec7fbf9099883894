#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUp {
    pub activity_name: String,
    pub email: String,
    pub participants: Vec<String>,
}

impl SignedUp {
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}
