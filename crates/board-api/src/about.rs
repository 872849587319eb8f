use axum::Json;

use board_types::api::AboutUsContent;

const TITLE: &str = "About Us";

const DESCRIPTION: &str = concat!(
    "Hi, my name is Sam and here I'll tell you a little about myself. ",
    "I'm 21 years old and I'm from Saint Paul, MN. ",
    "I have been doing computer science for about 8 years now. ",
    "I'm a current intern at Incisive Computing Solutions in Minneapolis which I do remote work for. ",
    "There I work full stack, with a team of about 8 on the Omni~View product. ",
    "I use mostly C#, Java, and Python but I've dabbled in JavaScript in the past. ",
    "As for data management, I've only ever used SQL so MongoDB will be an exciting new journey for me.",
    "\n\n      ",
    "Outside of CS I'm minoring in philosophy and math. ",
    "I love reading philosophy and discussing ideas. I also love math. ",
    "Outside of classes I enjoy ultimate frisbee with NYU Purple Haze, ",
    "I enjoy listening to music, djing, video games, and fashion. ",
    "I hope to use this class to spread my wings and learn a new development stack, ",
    "as well as bring my scrum abilities to an even greater level! ",
    "I'm very excited to put some of my skills to use and build a fun app!",
);

const IMAGE_URL: &str =
    "https://github.com/SamRawdon/resume.github.io/raw/refs/heads/main/photoOfSam.jpg";

pub fn content() -> AboutUsContent {
    AboutUsContent {
        title: TITLE.to_string(),
        description: DESCRIPTION.to_string(),
        image_url: IMAGE_URL.to_string(),
    }
}

pub async fn about_us() -> Json<AboutUsContent> {
    Json(content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_points_at_the_hosted_photo() {
        let content = content();
        assert_eq!(content.title, "About Us");
        assert!(content.description.starts_with("Hi, my name is Sam"));
        assert!(content.description.contains("journey for me.\n\n"));
        assert_eq!(
            content.image_url,
            "https://github.com/SamRawdon/resume.github.io/raw/refs/heads/main/photoOfSam.jpg"
        );
    }
}
