pub mod health;
pub mod mbti;
