//! Shared behavior through a trait: every animal can `say` its voice, and
//! each concrete animal adds its own trick.

pub trait Animal {
    fn name(&self) -> &str;
    fn voice(&self) -> &str;

    fn say(&self) -> String {
        format!("I say: {}", self.voice())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    name: String,
    voice: String,
}

impl Cat {
    pub fn new(name: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            voice: voice.into(),
        }
    }

    pub fn be_cute(&self) -> &'static str {
        "Purrrrrrr....purrrrr....."
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn voice(&self) -> &str {
        &self.voice
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    name: String,
    voice: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            voice: voice.into(),
        }
    }

    pub fn guard(&self) -> &'static str {
        "Step aside, strrrrrrranger!"
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn voice(&self) -> &str {
        &self.voice
    }
}
