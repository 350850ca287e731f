//! Intrinsic - CloudFormation intrinsic functions and pseudo parameters
//!
//! An intrinsic function is written in a template as a JSON object with a
//! single key naming the function (`Ref`, `Condition` or `Fn::*`). Only the
//! shape is modelled here; nothing is evaluated.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::json;

use crate::error::IntrinsicError;
use crate::value::{Expr, Json, Value};

const REF: &str = "Ref";
const CONDITION: &str = "Condition";
const GET_ATT: &str = "Fn::GetAtt";
const SUB: &str = "Fn::Sub";
const JOIN: &str = "Fn::Join";
const SELECT: &str = "Fn::Select";
const SPLIT: &str = "Fn::Split";
const BASE64: &str = "Fn::Base64";
const GET_AZS: &str = "Fn::GetAZs";
const IMPORT_VALUE: &str = "Fn::ImportValue";
const FIND_IN_MAP: &str = "Fn::FindInMap";
const CIDR: &str = "Fn::Cidr";
const IF: &str = "Fn::If";
const EQUALS: &str = "Fn::Equals";
const AND: &str = "Fn::And";
const OR: &str = "Fn::Or";
const NOT: &str = "Fn::Not";

/// `Fn::And` and `Fn::Or` take between 2 and 10 conditions
const MIN_CONDITIONS: usize = 2;
const MAX_CONDITIONS: usize = 10;

/// Intrinsic function expression
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    /// `Ref` to a parameter, resource or pseudo parameter
    Ref(String),
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    /// `Fn::Sub`; `variables` is `None` for the short string form
    Sub {
        template: String,
        variables: Option<BTreeMap<String, Expr>>,
    },
    Join {
        delimiter: String,
        values: Box<Expr>,
    },
    Select {
        index: Box<Expr>,
        list: Box<Expr>,
    },
    Split {
        delimiter: String,
        source: Box<Expr>,
    },
    Base64(Box<Expr>),
    GetAzs(Box<Expr>),
    ImportValue(Box<Expr>),
    FindInMap {
        map_name: Box<Expr>,
        top_level_key: Box<Expr>,
        second_level_key: Box<Expr>,
    },
    Cidr {
        ip_block: Box<Expr>,
        count: Box<Expr>,
        cidr_bits: Box<Expr>,
    },
    If {
        condition: String,
        value_if_true: Box<Expr>,
        value_if_false: Box<Expr>,
    },
    Equals(Box<Expr>, Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
    /// Reference to a named condition, used inside condition functions
    Condition(String),
}

impl Intrinsic {
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Intrinsic::Ref(logical_id.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Intrinsic::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: None,
        }
    }

    pub fn sub_with<K, V>(
        template: impl Into<String>,
        variables: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Expr>,
    {
        Intrinsic::Sub {
            template: template.into(),
            variables: Some(
                variables
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn join<V: Into<Expr>>(
        delimiter: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values = values.into_iter().map(|v| v.into().to_json()).collect();
        Intrinsic::Join {
            delimiter: delimiter.into(),
            values: Box::new(Value::Literal(Json::Array(values))),
        }
    }

    pub fn select(index: impl Into<Expr>, list: impl Into<Expr>) -> Self {
        Intrinsic::Select {
            index: Box::new(index.into()),
            list: Box::new(list.into()),
        }
    }

    pub fn split(delimiter: impl Into<String>, source: impl Into<Expr>) -> Self {
        Intrinsic::Split {
            delimiter: delimiter.into(),
            source: Box::new(source.into()),
        }
    }

    pub fn base64(value: impl Into<Expr>) -> Self {
        Intrinsic::Base64(Box::new(value.into()))
    }

    pub fn get_azs(region: impl Into<Expr>) -> Self {
        Intrinsic::GetAzs(Box::new(region.into()))
    }

    pub fn import_value(name: impl Into<Expr>) -> Self {
        Intrinsic::ImportValue(Box::new(name.into()))
    }

    pub fn find_in_map(
        map_name: impl Into<Expr>,
        top_level_key: impl Into<Expr>,
        second_level_key: impl Into<Expr>,
    ) -> Self {
        Intrinsic::FindInMap {
            map_name: Box::new(map_name.into()),
            top_level_key: Box::new(top_level_key.into()),
            second_level_key: Box::new(second_level_key.into()),
        }
    }

    pub fn cidr(
        ip_block: impl Into<Expr>,
        count: impl Into<Expr>,
        cidr_bits: impl Into<Expr>,
    ) -> Self {
        Intrinsic::Cidr {
            ip_block: Box::new(ip_block.into()),
            count: Box::new(count.into()),
            cidr_bits: Box::new(cidr_bits.into()),
        }
    }

    pub fn if_(
        condition: impl Into<String>,
        value_if_true: impl Into<Expr>,
        value_if_false: impl Into<Expr>,
    ) -> Self {
        Intrinsic::If {
            condition: condition.into(),
            value_if_true: Box::new(value_if_true.into()),
            value_if_false: Box::new(value_if_false.into()),
        }
    }

    pub fn equals(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Intrinsic::Equals(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn and<V: Into<Expr>>(conditions: impl IntoIterator<Item = V>) -> Self {
        Intrinsic::And(conditions.into_iter().map(Into::into).collect())
    }

    pub fn or<V: Into<Expr>>(conditions: impl IntoIterator<Item = V>) -> Self {
        Intrinsic::Or(conditions.into_iter().map(Into::into).collect())
    }

    pub fn not(condition: impl Into<Expr>) -> Self {
        Intrinsic::Not(Box::new(condition.into()))
    }

    pub fn condition(name: impl Into<String>) -> Self {
        Intrinsic::Condition(name.into())
    }

    /// Template key of this function (e.g. "Fn::GetAtt")
    pub fn function_name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => REF,
            Intrinsic::GetAtt { .. } => GET_ATT,
            Intrinsic::Sub { .. } => SUB,
            Intrinsic::Join { .. } => JOIN,
            Intrinsic::Select { .. } => SELECT,
            Intrinsic::Split { .. } => SPLIT,
            Intrinsic::Base64(_) => BASE64,
            Intrinsic::GetAzs(_) => GET_AZS,
            Intrinsic::ImportValue(_) => IMPORT_VALUE,
            Intrinsic::FindInMap { .. } => FIND_IN_MAP,
            Intrinsic::Cidr { .. } => CIDR,
            Intrinsic::If { .. } => IF,
            Intrinsic::Equals(..) => EQUALS,
            Intrinsic::And(_) => AND,
            Intrinsic::Or(_) => OR,
            Intrinsic::Not(_) => NOT,
            Intrinsic::Condition(_) => CONDITION,
        }
    }

    /// Template JSON form of this expression
    pub fn to_json(&self) -> Json {
        let args = match self {
            Intrinsic::Ref(name) | Intrinsic::Condition(name) => json!(name),
            Intrinsic::GetAtt {
                logical_id,
                attribute,
            } => json!([logical_id, attribute]),
            Intrinsic::Sub {
                template,
                variables,
            } => match variables {
                None => json!(template),
                Some(variables) => {
                    let vars: serde_json::Map<String, Json> = variables
                        .iter()
                        .map(|(k, v)| (k.clone(), v.to_json()))
                        .collect();
                    json!([template, vars])
                }
            },
            Intrinsic::Join { delimiter, values } => json!([delimiter, values.to_json()]),
            Intrinsic::Select { index, list } => json!([index.to_json(), list.to_json()]),
            Intrinsic::Split { delimiter, source } => json!([delimiter, source.to_json()]),
            Intrinsic::Base64(value)
            | Intrinsic::GetAzs(value)
            | Intrinsic::ImportValue(value) => value.to_json(),
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => json!([
                map_name.to_json(),
                top_level_key.to_json(),
                second_level_key.to_json()
            ]),
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => json!([ip_block.to_json(), count.to_json(), cidr_bits.to_json()]),
            Intrinsic::If {
                condition,
                value_if_true,
                value_if_false,
            } => json!([condition, value_if_true.to_json(), value_if_false.to_json()]),
            Intrinsic::Equals(left, right) => json!([left.to_json(), right.to_json()]),
            Intrinsic::And(conditions) | Intrinsic::Or(conditions) => {
                Json::Array(conditions.iter().map(Value::to_json).collect())
            }
            Intrinsic::Not(condition) => json!([condition.to_json()]),
        };

        let mut object = serde_json::Map::new();
        object.insert(self.function_name().to_string(), args);
        Json::Object(object)
    }

    /// Read an intrinsic function from template JSON
    ///
    /// Returns `Ok(None)` when the JSON does not have the shape of an
    /// intrinsic (not a single-key object keyed by `Ref`, `Condition` or
    /// `Fn::*`), so that callers can fall back to a literal.
    pub fn from_json(json: &Json) -> Result<Option<Self>, IntrinsicError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };
        if object.len() != 1 {
            return Ok(None);
        }
        let Some((key, args)) = object.iter().next() else {
            return Ok(None);
        };

        let intrinsic = match key.as_str() {
            REF => Intrinsic::Ref(string(REF, args)?),
            CONDITION => Intrinsic::Condition(string(CONDITION, args)?),
            GET_ATT => parse_get_att(args)?,
            SUB => parse_sub(args)?,
            JOIN => {
                let [delimiter, values] = array::<2>(JOIN, args)?;
                Intrinsic::Join {
                    delimiter: string(JOIN, delimiter)?,
                    values: Box::new(expr(values)?),
                }
            }
            SELECT => {
                let [index, list] = array::<2>(SELECT, args)?;
                Intrinsic::Select {
                    index: Box::new(expr(index)?),
                    list: Box::new(expr(list)?),
                }
            }
            SPLIT => {
                let [delimiter, source] = array::<2>(SPLIT, args)?;
                Intrinsic::Split {
                    delimiter: string(SPLIT, delimiter)?,
                    source: Box::new(expr(source)?),
                }
            }
            BASE64 => Intrinsic::Base64(Box::new(expr(args)?)),
            GET_AZS => Intrinsic::GetAzs(Box::new(expr(args)?)),
            IMPORT_VALUE => Intrinsic::ImportValue(Box::new(expr(args)?)),
            FIND_IN_MAP => {
                let [map_name, top_level_key, second_level_key] = array::<3>(FIND_IN_MAP, args)?;
                Intrinsic::FindInMap {
                    map_name: Box::new(expr(map_name)?),
                    top_level_key: Box::new(expr(top_level_key)?),
                    second_level_key: Box::new(expr(second_level_key)?),
                }
            }
            CIDR => {
                let [ip_block, count, cidr_bits] = array::<3>(CIDR, args)?;
                Intrinsic::Cidr {
                    ip_block: Box::new(expr(ip_block)?),
                    count: Box::new(expr(count)?),
                    cidr_bits: Box::new(expr(cidr_bits)?),
                }
            }
            IF => {
                let [condition, value_if_true, value_if_false] = array::<3>(IF, args)?;
                Intrinsic::If {
                    condition: string(IF, condition)?,
                    value_if_true: Box::new(expr(value_if_true)?),
                    value_if_false: Box::new(expr(value_if_false)?),
                }
            }
            EQUALS => {
                let [left, right] = array::<2>(EQUALS, args)?;
                Intrinsic::Equals(Box::new(expr(left)?), Box::new(expr(right)?))
            }
            AND => Intrinsic::And(conditions(AND, args)?),
            OR => Intrinsic::Or(conditions(OR, args)?),
            NOT => {
                let [condition] = array::<1>(NOT, args)?;
                Intrinsic::Not(Box::new(expr(condition)?))
            }
            other if other.starts_with("Fn::") => {
                return Err(IntrinsicError::UnknownFunction {
                    name: other.to_string(),
                });
            }
            _ => return Ok(None),
        };

        Ok(Some(intrinsic))
    }
}

fn string(function: &'static str, json: &Json) -> Result<String, IntrinsicError> {
    json.as_str()
        .map(str::to_string)
        .ok_or_else(|| IntrinsicError::invalid(function, format!("expected a string, got {json}")))
}

fn array<'a, const N: usize>(
    function: &'static str,
    json: &'a Json,
) -> Result<&'a [Json; N], IntrinsicError> {
    let items = json
        .as_array()
        .ok_or_else(|| IntrinsicError::invalid(function, "expected an array"))?;
    <&[Json; N]>::try_from(items.as_slice()).map_err(|_| {
        IntrinsicError::invalid(
            function,
            format!("expected {} arguments, got {}", N, items.len()),
        )
    })
}

fn expr(json: &Json) -> Result<Expr, IntrinsicError> {
    Ok(match Intrinsic::from_json(json)? {
        Some(intrinsic) => Value::Intrinsic(intrinsic),
        None => Value::Literal(json.clone()),
    })
}

fn conditions(function: &'static str, json: &Json) -> Result<Vec<Expr>, IntrinsicError> {
    let items = json
        .as_array()
        .ok_or_else(|| IntrinsicError::invalid(function, "expected an array of conditions"))?;
    if !(MIN_CONDITIONS..=MAX_CONDITIONS).contains(&items.len()) {
        return Err(IntrinsicError::invalid(
            function,
            format!(
                "expected between {} and {} conditions, got {}",
                MIN_CONDITIONS,
                MAX_CONDITIONS,
                items.len()
            ),
        ));
    }
    items.iter().map(expr).collect()
}

fn parse_get_att(args: &Json) -> Result<Intrinsic, IntrinsicError> {
    // Short form: "LogicalId.Attribute", where the attribute may itself contain dots
    if let Some(short) = args.as_str() {
        return match short.split_once('.') {
            Some((logical_id, attribute)) if !logical_id.is_empty() && !attribute.is_empty() => {
                Ok(Intrinsic::get_att(logical_id, attribute))
            }
            _ => Err(IntrinsicError::invalid(
                GET_ATT,
                format!("expected 'LogicalId.Attribute', got '{short}'"),
            )),
        };
    }

    let [logical_id, attribute] = array::<2>(GET_ATT, args)?;
    Ok(Intrinsic::GetAtt {
        logical_id: string(GET_ATT, logical_id)?,
        attribute: string(GET_ATT, attribute)?,
    })
}

fn parse_sub(args: &Json) -> Result<Intrinsic, IntrinsicError> {
    if let Some(template) = args.as_str() {
        return Ok(Intrinsic::sub(template));
    }

    let [template, variables] = array::<2>(SUB, args)?;
    let variables = variables
        .as_object()
        .ok_or_else(|| IntrinsicError::invalid(SUB, "expected a variable map"))?
        .iter()
        .map(|(name, value)| Ok((name.clone(), expr(value)?)))
        .collect::<Result<BTreeMap<_, _>, IntrinsicError>>()?;

    Ok(Intrinsic::Sub {
        template: string(SUB, template)?,
        variables: Some(variables),
    })
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        Intrinsic::from_json(&json)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom(format!("expected an intrinsic function, got {json}")))
    }
}

/// Pseudo parameters predefined by CloudFormation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoParameter {
    AccountId,
    NotificationArns,
    NoValue,
    Partition,
    Region,
    StackId,
    StackName,
    UrlSuffix,
}

impl PseudoParameter {
    pub const ALL: [PseudoParameter; 8] = [
        PseudoParameter::AccountId,
        PseudoParameter::NotificationArns,
        PseudoParameter::NoValue,
        PseudoParameter::Partition,
        PseudoParameter::Region,
        PseudoParameter::StackId,
        PseudoParameter::StackName,
        PseudoParameter::UrlSuffix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PseudoParameter::AccountId => "AWS::AccountId",
            PseudoParameter::NotificationArns => "AWS::NotificationARNs",
            PseudoParameter::NoValue => "AWS::NoValue",
            PseudoParameter::Partition => "AWS::Partition",
            PseudoParameter::Region => "AWS::Region",
            PseudoParameter::StackId => "AWS::StackId",
            PseudoParameter::StackName => "AWS::StackName",
            PseudoParameter::UrlSuffix => "AWS::URLSuffix",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl From<PseudoParameter> for Intrinsic {
    fn from(parameter: PseudoParameter) -> Self {
        Intrinsic::Ref(parameter.as_str().to_string())
    }
}

impl<T> From<PseudoParameter> for Value<T> {
    fn from(parameter: PseudoParameter) -> Self {
        Value::Intrinsic(parameter.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: Json) -> Intrinsic {
        Intrinsic::from_json(&json).unwrap().unwrap()
    }

    #[test]
    fn ref_round_trip() {
        let json = json!({"Ref": "MyBucket"});
        let intrinsic = parse(json.clone());
        assert_eq!(intrinsic, Intrinsic::reference("MyBucket"));
        assert_eq!(intrinsic.to_json(), json);
    }

    #[test]
    fn get_att_long_and_short_form() {
        let long = parse(json!({"Fn::GetAtt": ["Distribution", "DomainName"]}));
        let short = parse(json!({"Fn::GetAtt": "Distribution.DomainName"}));
        assert_eq!(long, short);
        assert_eq!(
            short.to_json(),
            json!({"Fn::GetAtt": ["Distribution", "DomainName"]})
        );
    }

    #[test]
    fn get_att_short_form_keeps_nested_attribute() {
        let intrinsic = parse(json!({"Fn::GetAtt": "Db.Endpoint.Address"}));
        assert_eq!(intrinsic, Intrinsic::get_att("Db", "Endpoint.Address"));
    }

    #[test]
    fn get_att_short_form_without_dot_is_invalid() {
        assert!(Intrinsic::from_json(&json!({"Fn::GetAtt": "Distribution"})).is_err());
    }

    #[test]
    fn sub_short_and_long_form() {
        let short = parse(json!({"Fn::Sub": "arn:${AWS::Partition}:s3:::${Bucket}"}));
        assert_eq!(
            short,
            Intrinsic::sub("arn:${AWS::Partition}:s3:::${Bucket}")
        );

        let long = parse(json!({"Fn::Sub": ["${Name}-logs", {"Name": {"Ref": "AWS::StackName"}}]}));
        let Intrinsic::Sub { variables, .. } = &long else {
            panic!("expected Fn::Sub");
        };
        assert_eq!(
            variables.as_ref().and_then(|v| v.get("Name")),
            Some(&Value::Intrinsic(PseudoParameter::StackName.into()))
        );
        assert_eq!(
            long.to_json(),
            json!({"Fn::Sub": ["${Name}-logs", {"Name": {"Ref": "AWS::StackName"}}]})
        );
    }

    #[test]
    fn sub_keeps_long_form_with_empty_variables() {
        let long = json!({"Fn::Sub": ["x-${AWS::Region}", {}]});
        let intrinsic = parse(long.clone());
        assert_ne!(intrinsic, Intrinsic::sub("x-${AWS::Region}"));
        assert_eq!(intrinsic.to_json(), long);

        let built = Intrinsic::sub_with("x-${AWS::Region}", Vec::<(String, Expr)>::new());
        assert_eq!(built.to_json(), long);
    }

    #[test]
    fn join_builder_matches_parsed_form() {
        let built = Intrinsic::join(
            "",
            [
                Expr::from(json!("https://")),
                Intrinsic::get_att("Distribution", "DomainName").into(),
            ],
        );
        let parsed = parse(json!({
            "Fn::Join": ["", ["https://", {"Fn::GetAtt": ["Distribution", "DomainName"]}]]
        }));
        assert_eq!(built, parsed);
    }

    #[test]
    fn join_accepts_intrinsic_list() {
        let intrinsic = parse(json!({"Fn::Join": [",", {"Ref": "Aliases"}]}));
        let Intrinsic::Join { values, .. } = intrinsic else {
            panic!("expected Fn::Join");
        };
        assert!(values.is_intrinsic());
    }

    #[test]
    fn select_split_nesting() {
        let json = json!({
            "Fn::Select": ["2", {"Fn::Split": ["/", {"Fn::GetAtt": ["Site", "WebsiteURL"]}]}]
        });
        let intrinsic = parse(json.clone());
        let Intrinsic::Select { list, .. } = &intrinsic else {
            panic!("expected Fn::Select");
        };
        assert!(matches!(
            list.as_intrinsic(),
            Some(Intrinsic::Split { delimiter, .. }) if delimiter == "/"
        ));
        assert_eq!(intrinsic.to_json(), json);
    }

    #[test]
    fn single_argument_functions() {
        for json in [
            json!({"Fn::Base64": "#!/bin/bash"}),
            json!({"Fn::GetAZs": ""}),
            json!({"Fn::ImportValue": {"Fn::Sub": "${Network}-VpcId"}}),
        ] {
            assert_eq!(parse(json.clone()).to_json(), json);
        }
    }

    #[test]
    fn find_in_map_and_cidr() {
        let find = json!({"Fn::FindInMap": ["RegionMap", {"Ref": "AWS::Region"}, "Origin"]});
        assert_eq!(parse(find.clone()).to_json(), find);

        let cidr = json!({"Fn::Cidr": ["10.0.0.0/16", 4, 8]});
        assert_eq!(parse(cidr.clone()).to_json(), cidr);

        assert!(Intrinsic::from_json(&json!({"Fn::Cidr": ["10.0.0.0/16", 4]})).is_err());
    }

    #[test]
    fn condition_functions() {
        let json = json!({
            "Fn::If": [
                "IsProd",
                {"Fn::And": [{"Condition": "HasDomain"}, {"Fn::Not": [{"Fn::Equals": [{"Ref": "Env"}, "dev"]}]}]},
                {"Ref": "AWS::NoValue"}
            ]
        });
        let intrinsic = parse(json.clone());
        assert_eq!(intrinsic.function_name(), "Fn::If");
        assert_eq!(intrinsic.to_json(), json);
    }

    #[test]
    fn and_or_condition_count_is_checked() {
        assert!(Intrinsic::from_json(&json!({"Fn::Or": [{"Condition": "A"}]})).is_err());
        let eleven: Vec<Json> = (0..11).map(|i| json!({"Condition": format!("C{i}")})).collect();
        assert!(Intrinsic::from_json(&json!({"Fn::And": eleven})).is_err());
        assert!(
            Intrinsic::from_json(&json!({"Fn::Or": [{"Condition": "A"}, {"Condition": "B"}]}))
                .is_ok()
        );
    }

    #[test]
    fn nested_errors_propagate() {
        let result = Intrinsic::from_json(&json!({"Fn::Base64": {"Fn::Sub": 42}}));
        assert_eq!(
            result.unwrap_err(),
            IntrinsicError::invalid("Fn::Sub", "expected an array")
        );
    }

    #[test]
    fn non_intrinsic_shapes() {
        assert_eq!(Intrinsic::from_json(&json!("plain")).unwrap(), None);
        assert_eq!(Intrinsic::from_json(&json!({"Key": "Name"})).unwrap(), None);
        assert_eq!(Intrinsic::from_json(&json!({})).unwrap(), None);
    }

    #[test]
    fn unknown_function() {
        assert_eq!(
            Intrinsic::from_json(&json!({"Fn::Length": [1, 2]})).unwrap_err(),
            IntrinsicError::UnknownFunction {
                name: "Fn::Length".to_string()
            }
        );
    }

    #[test]
    fn deserialize_rejects_literals() {
        assert!(serde_json::from_value::<Intrinsic>(json!("MyBucket")).is_err());
        assert!(serde_json::from_value::<Intrinsic>(json!({"Ref": "MyBucket"})).is_ok());
    }

    #[test]
    fn pseudo_parameters() {
        assert_eq!(
            Intrinsic::from(PseudoParameter::UrlSuffix).to_json(),
            json!({"Ref": "AWS::URLSuffix"})
        );
        for parameter in PseudoParameter::ALL {
            assert_eq!(
            PseudoParameter::from_name(parameter.as_str()),
            Some(parameter)
        );
        }
        assert_eq!(PseudoParameter::from_name("AWS::Nope"), None);
    }
}
