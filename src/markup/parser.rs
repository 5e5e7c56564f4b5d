//! Parser for the XML subset produced by typesetting engines.

use super::tree::{write_attributes, Attribute, Element, Node};
use crate::error::MarkupError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_until, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, value},
    error::ErrorKind,
    multi::many0,
    sequence::{delimited, preceded, tuple},
    IResult, Offset,
};
use quick_xml::escape::unescape;

/// Parse a complete document and return its root element.
pub fn parse_document(input: &str) -> Result<Element, MarkupError> {
    let (rest, _) = many0(misc)(input).map_err(|e| to_markup_error(input, e))?;
    if rest.trim().is_empty() {
        return Err(MarkupError::MissingRoot);
    }

    let (rest, root) = element(rest).map_err(|e| to_markup_error(input, e))?;
    let (rest, _) = many0(misc)(rest).map_err(|e| to_markup_error(input, e))?;
    if !rest.is_empty() {
        return Err(MarkupError::Syntax {
            offset: input.len() - rest.len(),
            message: "trailing content after root element".into(),
        });
    }

    Ok(root)
}

/// Parse a document whose root must be an `<svg>` element.
pub fn parse_svg(input: &str) -> Result<Element, MarkupError> {
    let root = parse_document(input)?;
    if local_name(&root.name) != "svg" {
        return Err(MarkupError::UnexpectedRoot {
            expected: "svg".into(),
            found: root.name,
        });
    }
    Ok(root)
}

/// Rewrite the attributes of the first start tag, leaving the rest of the
/// markup untouched. Works on HTML fragments that are not well-formed XML.
pub fn edit_root_attributes(
    markup: &str,
    edit: impl FnOnce(&mut Element),
) -> Result<String, MarkupError> {
    let (rest, _) = many0(misc)(markup).map_err(|e| to_markup_error(markup, e))?;
    if rest.trim().is_empty() {
        return Err(MarkupError::MissingRoot);
    }

    let (after, (name, attributes, self_closing)) =
        start_tag(rest).map_err(|e| to_markup_error(markup, e))?;

    let mut root = Element {
        name: name.to_string(),
        attributes,
        children: Vec::new(),
    };
    edit(&mut root);

    let mut out = String::with_capacity(markup.len() + 64);
    out.push_str(&markup[..markup.len() - rest.len()]);
    out.push('<');
    out.push_str(&root.name);
    write_attributes(&root.attributes, &mut out);
    out.push_str(if self_closing { "/>" } else { ">" });
    out.push_str(after);
    Ok(out)
}

fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn xml_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || matches!(c, ':' | '-' | '_' | '.'))(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c| c == '"'), char('"')),
        delimited(char('\''), take_till(|c| c == '\''), char('\'')),
    ))(input)
}

fn attribute(start: &str) -> IResult<&str, Attribute> {
    let (input, (_, name, _, _, _, raw)) =
        tuple((multispace1, xml_name, multispace0, char('='), multispace0, quoted))(start)?;
    // An undecodable entity would be re-escaped into different text.
    let value = unescape(raw).map_err(|_| {
        nom::Err::Failure(nom::error::Error::new(&start[start.offset(raw)..], ErrorKind::Escaped))
    })?;
    Ok((
        input,
        Attribute {
            name: name.to_string(),
            value: value.into_owned(),
        },
    ))
}

fn start_tag(input: &str) -> IResult<&str, (&str, Vec<Attribute>, bool)> {
    let (input, _) = char('<')(input)?;
    let (input, name) = xml_name(input)?;
    let (input, attributes) = many0(attribute)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, self_closing) = alt((value(true, tag("/>")), value(false, tag(">"))))(input)?;
    Ok((input, (name, attributes, self_closing)))
}

fn end_tag(input: &str) -> IResult<&str, &str> {
    delimited(tag("</"), xml_name, preceded(multispace0, char('>')))(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    let (input, (name, attributes, self_closing)) = start_tag(input)?;
    let mut el = Element {
        name: name.to_string(),
        attributes,
        children: Vec::new(),
    };
    if self_closing {
        return Ok((input, el));
    }

    let (input, children) = many0(node)(input)?;
    let (rest, close) = end_tag(input)?;
    if close != name {
        // A mismatched end tag cannot be recovered by backtracking.
        return Err(nom::Err::Failure(nom::error::Error::new(input, ErrorKind::Tag)));
    }

    el.children = children;
    Ok((rest, el))
}

fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("<!--"), take_until("-->"), tag("-->"))(input)
}

fn cdata(input: &str) -> IResult<&str, &str> {
    delimited(tag("<![CDATA["), take_until("]]>"), tag("]]>"))(input)
}

fn node(input: &str) -> IResult<&str, Node> {
    alt((
        map(comment, |c: &str| Node::Comment(c.to_string())),
        map(cdata, |c: &str| Node::CData(c.to_string())),
        map(element, Node::Element),
        map(take_till1(|c| c == '<'), |t: &str| Node::Text(t.to_string())),
    ))(input)
}

/// Whitespace, comments, processing instructions and doctypes around the root.
fn misc(input: &str) -> IResult<&str, ()> {
    alt((
        value((), multispace1),
        value((), comment),
        value((), delimited(tag("<?"), take_until("?>"), tag("?>"))),
        value((), delimited(tag("<!DOCTYPE"), take_until(">"), char('>'))),
    ))(input)
}

fn to_markup_error(input: &str, err: nom::Err<nom::error::Error<&str>>) -> MarkupError {
    match err {
        nom::Err::Incomplete(_) => MarkupError::Syntax {
            offset: input.len(),
            message: "unexpected end of input".into(),
        },
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let near: String = e.input.chars().take(16).collect();
            MarkupError::Syntax {
                offset: input.len() - e.input.len(),
                message: format!("{} near {:?}", e.code.description(), near),
            }
        }
    }
}
