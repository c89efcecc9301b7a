use jsonwebtoken::{
	decode, encode, errors::Result, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
	pub id: String,
	pub role: i32,
	pub exp: usize,
}

pub fn generate(claims: Claims, secret_key: &str) -> Result<String> {
	encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(secret_key.as_bytes()),
	)
}

pub fn verify(token: &str, secret_key: &str) -> Result<TokenData<Claims>> {
	decode::<Claims>(
		token,
		&DecodingKey::from_secret(secret_key.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::utils::exp;

	#[test]
	fn roundtrip_preserves_id_and_role() {
		let claims = Claims {
			id: "user-1".to_string(),
			role: 1,
			exp: exp::expiration_from_min(60),
		};
		let token = generate(claims, "secret").unwrap();
		let decoded = verify(&token, "secret").unwrap();
		assert_eq!(decoded.claims.id, "user-1");
		assert_eq!(decoded.claims.role, 1);
	}

	#[test]
	fn wrong_secret_is_rejected() {
		let claims = Claims {
			id: "user-1".to_string(),
			role: 0,
			exp: exp::expiration_from_min(60),
		};
		let token = generate(claims, "secret").unwrap();
		assert!(verify(&token, "other-secret").is_err());
	}
}
