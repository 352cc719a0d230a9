/// Custo padrão do bcrypt (12 rounds): lento de propósito contra força bruta
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Hash e verificação de senhas com bcrypt.
///
/// Ambas as operações são CPU-bound e rodam no pool de blocking do Tokio
/// para não travar os workers do actix.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Gera o digest salgado de uma senha
    pub async fn hash(&self, password: &str) -> Result<String, String> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| format!("Hash task failed: {}", e))?
            .map_err(|e| format!("Failed to hash password: {}", e))
    }

    /// Compara a senha com o digest armazenado.
    ///
    /// Digest malformado conta como senha inválida (retorna `false`).
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, String> {
        let password = password.to_string();
        let digest = digest.to_string();

        let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest))
            .await
            .map_err(|e| format!("Verify task failed: {}", e))?;

        match result {
            Ok(valid) => Ok(valid),
            Err(e) => {
                log::warn!("⚠️  Stored password digest could not be parsed: {}", e);
                Ok(false)
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}
