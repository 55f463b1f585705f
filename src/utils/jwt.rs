use crate::config::{AppConfig, JwtConfig};
use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (admin ID)
    pub exp: usize,  // Expiration time (时间戳)
    pub iat: usize,  // Issued at (签发时间)
}

impl Claims {
    pub fn admin_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

pub struct JwtUtils;

impl JwtUtils {
    /// 会话有效期（秒）
    pub fn session_expiry_seconds() -> i64 {
        AppConfig::get().jwt.session_expiry * 3600
    }

    // 生成会话 Token
    pub fn generate_session_token(admin_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_token_with(&AppConfig::get().jwt, admin_id)
    }

    pub fn generate_token_with(
        jwt: &JwtConfig,
        admin_id: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::hours(jwt.session_expiry);

        let claims = Claims {
            sub: admin_id.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(jwt.secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_with(&AppConfig::get().jwt, token)
    }

    pub fn verify_token_with(
        jwt: &JwtConfig,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(jwt.secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    /// 创建会话 Cookie
    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.jwt.cookie_name.clone(), token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::hours(
                config.jwt.session_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production()) // 生产环境下使用 HTTPS
            .finish()
    }

    /// 创建空的会话 Cookie（用于注销）
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.jwt.cookie_name.clone(), "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 从请求中提取 Token：优先 Authorization: Bearer，其次会话 Cookie
    pub fn extract_token(req: &HttpRequest) -> Option<String> {
        let bearer = req
            .headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        bearer.or_else(|| {
            req.cookie(&AppConfig::get().jwt.cookie_name)
                .map(|cookie| cookie.value().to_string())
                .filter(|v| !v.is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(secret: &str, hours: i64) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            session_expiry: hours,
            cookie_name: "gradebook_session".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip_carries_admin_id() {
        let jwt = jwt_config("unit-test-secret", 24);
        let token = JwtUtils::generate_token_with(&jwt, 42).unwrap();
        let claims = JwtUtils::verify_token_with(&jwt, &token).unwrap();
        assert_eq!(claims.admin_id(), Some(42));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = JwtUtils::generate_token_with(&jwt_config("one", 24), 1).unwrap();
        assert!(JwtUtils::verify_token_with(&jwt_config("two", 24), &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let jwt = jwt_config("unit-test-secret", -2);
        let token = JwtUtils::generate_token_with(&jwt, 1).unwrap();
        assert!(JwtUtils::verify_token_with(&jwt, &token).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = actix_web::test::TestRequest::default()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(JwtUtils::extract_token(&req).as_deref(), Some("abc.def.ghi"));

        let req = actix_web::test::TestRequest::default()
            .insert_header(("Authorization", "Basic xyz"))
            .to_http_request();
        assert_eq!(JwtUtils::extract_token(&req), None);
    }
}
