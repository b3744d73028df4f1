use crate::FormatError;

/// The raw entity lump: a NUL terminated list of `{ "key" "value" ... }` blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entities {
  data: Box<[u8]>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entity {
  pub properties: Vec<(String, String)>,
}

impl Entity {
  pub fn get(&self, key: &str) -> Option<&str> {
    self
      .properties
      .iter()
      .find(|(property_key, _)| property_key == key)
      .map(|(_, value)| value.as_str())
  }

  pub fn class_name(&self) -> Option<&str> {
    self.get("classname")
  }

  /// Inline brush model index for values like `*3`.
  pub fn brush_model(&self) -> Option<usize> {
    self.get("model")?.strip_prefix('*')?.parse().ok()
  }
}

impl Entities {
  pub(crate) fn new(data: Box<[u8]>) -> Self {
    Self { data }
  }

  pub fn data(&self) -> &[u8] {
    &self.data
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Everything up to the first NUL.
  pub fn text_bytes(&self) -> &[u8] {
    let end = self.data.iter().position(|c| *c == 0).unwrap_or(self.data.len());
    &self.data[..end]
  }

  pub fn parse(&self) -> Result<Vec<Entity>, FormatError> {
    let mut tokens = Tokenizer {
      text: self.text_bytes(),
      position: 0,
    };
    let mut entities = Vec::new();

    while let Some(token) = tokens.next_token()? {
      if token != Token::BlockBegin {
        return Err(tokens.error("expected '{'"));
      }

      let mut entity = Entity::default();
      loop {
        let key = match tokens.next_token()? {
          Some(Token::BlockEnd) => break,
          Some(Token::Text(key)) => key,
          Some(Token::BlockBegin) => return Err(tokens.error("nested '{'")),
          None => return Err(tokens.error("unterminated block")),
        };
        let value = match tokens.next_token()? {
          Some(Token::Text(value)) => value,
          Some(_) => return Err(tokens.error("key without value")),
          None => return Err(tokens.error("unterminated block")),
        };
        entity.properties.push((key, value));
      }
      entities.push(entity);
    }
    Ok(entities)
  }
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
  BlockBegin,
  BlockEnd,
  Text(String),
}

struct Tokenizer<'a> {
  text: &'a [u8],
  position: usize,
}

impl Tokenizer<'_> {
  fn error(&self, reason: &'static str) -> FormatError {
    FormatError::InvalidEntities {
      position: self.position,
      reason,
    }
  }

  fn skip_whitespace_and_comments(&mut self) {
    loop {
      while self.position < self.text.len() && self.text[self.position].is_ascii_whitespace() {
        self.position += 1;
      }
      if self.text[self.position..].starts_with(b"//") {
        while self.position < self.text.len() && self.text[self.position] != b'\n' {
          self.position += 1;
        }
        continue;
      }
      break;
    }
  }

  fn next_token(&mut self) -> Result<Option<Token>, FormatError> {
    self.skip_whitespace_and_comments();
    let Some(&c) = self.text.get(self.position) else {
      return Ok(None);
    };

    match c {
      b'{' => {
        self.position += 1;
        Ok(Some(Token::BlockBegin))
      }
      b'}' => {
        self.position += 1;
        Ok(Some(Token::BlockEnd))
      }
      b'"' => {
        let start = self.position + 1;
        let length = self.text[start..]
          .iter()
          .position(|c| *c == b'"')
          .ok_or_else(|| self.error("unmatched quote"))?;
        self.position = start + length + 1;
        Ok(Some(Token::Text(String::from_utf8_lossy(&self.text[start..start + length]).into_owned())))
      }
      _ => {
        let start = self.position;
        while self.position < self.text.len()
          && !self.text[self.position].is_ascii_whitespace()
          && !matches!(self.text[self.position], b'{' | b'}' | b'"')
        {
          self.position += 1;
        }
        Ok(Some(Token::Text(String::from_utf8_lossy(&self.text[start..self.position]).into_owned())))
      }
    }
  }
}
