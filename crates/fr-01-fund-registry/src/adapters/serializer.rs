use crate::domain::entities::Fund;
use crate::domain::errors::SerializationError;
use crate::ports::outbound::FundSerializer;

/// Default fund serializer using bincode.
#[derive(Default, Clone, Copy)]
pub struct BincodeFundSerializer;

impl FundSerializer for BincodeFundSerializer {
    fn serialize(&self, fund: &Fund) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(fund).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize(&self, data: &[u8]) -> Result<Fund, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Identity;

    #[test]
    fn test_truncated_record_is_rejected() {
        let fund = Fund::new(
            9,
            500,
            Identity::from_text("r"),
            10,
            Identity::from_text("a"),
            1,
        );
        let bytes = BincodeFundSerializer.serialize(&fund).unwrap();

        assert_eq!(BincodeFundSerializer.deserialize(&bytes).unwrap(), fund);
        assert!(BincodeFundSerializer
            .deserialize(&bytes[..bytes.len() / 2])
            .is_err());
    }
}
