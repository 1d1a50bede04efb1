use metagaming_core::RepositoryError;
use mongodb::bson::oid::ObjectId;

pub(crate) fn parse(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_owned()))
}

pub(crate) fn generate() -> String {
    ObjectId::new().to_hex()
}
