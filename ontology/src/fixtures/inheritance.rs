//! Inheritance ontology.
//!
//! A diamond (`TeachingAssistant` under both `Employee` and `Student`), a
//! subclass cycle, and the same property restricted differently along the
//! two diamond paths.

/// Inheritance ontology used for traversal, dedup and conflict tests.
pub const INHERITANCE: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <https://w3id.org/example#> .

ex:Agent a owl:Class ;
    rdfs:subClassOf owl:Thing .

ex:Person a owl:Class ;
    rdfs:subClassOf ex:Agent ,
        [ a owl:Restriction ;
          owl:onProperty ex:worksFor ;
          owl:someValuesFrom ex:Organization ] .

ex:Employee a owl:Class ;
    rdfs:subClassOf ex:Person ,
        [ a owl:Restriction ;
          owl:onProperty ex:worksFor ;
          owl:maxCardinality "1"^^xsd:nonNegativeInteger ] .

ex:Student a owl:Class ;
    rdfs:subClassOf ex:Person ,
        [ a owl:Restriction ;
          owl:onProperty ex:worksFor ;
          owl:maxCardinality "3"^^xsd:nonNegativeInteger ] .

ex:TeachingAssistant a owl:Class ;
    rdfs:subClassOf ex:Employee , ex:Student .

ex:Organization a owl:Class .

ex:Chicken a owl:Class ;
    rdfs:subClassOf ex:Egg .

ex:Egg a owl:Class ;
    rdfs:subClassOf ex:Chicken ,
        [ a owl:Restriction ;
          owl:onProperty ex:weight ;
          owl:maxCardinality "1"^^xsd:nonNegativeInteger ] .

ex:worksFor a owl:ObjectProperty ;
    rdfs:domain ex:Person ;
    rdfs:range ex:Organization .

ex:name a owl:DatatypeProperty ;
    rdfs:domain ex:Agent ;
    rdfs:range xsd:string .

ex:salary a owl:DatatypeProperty ;
    rdfs:domain ex:Employee ;
    rdfs:range xsd:double .

ex:weight a owl:DatatypeProperty ;
    rdfs:domain ex:Egg ;
    rdfs:range xsd:float .
"#;
