use uuid::Uuid;

/// Objects that keep a stable identity while their other fields change.
pub trait ObjectWithUUID {
    fn uuid(&self) -> &Uuid;
}
