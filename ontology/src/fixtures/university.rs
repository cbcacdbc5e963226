//! University ontology.
//!
//! Exercises every restriction shape the compiler understands: functional
//! properties, existential unions, universal intersections, exact, minimum
//! and qualified cardinalities, data enumerations, fixed values, class
//! complements and class-level enumerations.

/// University ontology used for restriction compilation tests.
pub const UNIVERSITY: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix ex:   <https://w3id.org/example#> .

<https://w3id.org/example> a owl:Ontology ;
    rdfs:label "University ontology" .

# Classes

ex:Person a owl:Class ;
    rdfs:label "Person" ;
    rdfs:comment "A human being." ;
    rdfs:subClassOf
        [ a owl:Restriction ;
          owl:onProperty ex:gender ;
          owl:someValuesFrom [ a rdfs:Datatype ; owl:oneOf ( "female" "male" ) ] ] ,
        [ a owl:Restriction ;
          owl:onProperty ex:label ;
          owl:cardinality "1"^^xsd:nonNegativeInteger ] .

ex:Organization a owl:Class ;
    rdfs:comment "A group of people with a shared purpose." .

ex:University a owl:Class ;
    rdfs:subClassOf ex:Organization ,
        [ a owl:Restriction ;
          owl:onProperty ex:hasDepartment ;
          owl:someValuesFrom ex:Department ] .

ex:Department a owl:Class .

ex:Rector a owl:Class ;
    rdfs:subClassOf ex:Person .

ex:StudyMaterial a owl:Class ;
    skos:definition "Material used in a course." ;
    rdfs:subClassOf
        [ a owl:Restriction ;
          owl:onProperty ex:author ;
          owl:someValuesFrom [ a owl:Class ; owl:unionOf ( ex:Organization ex:Person ) ] ] .

ex:Course a owl:Class ;
    skos:definition "A unit of teaching." ;
    rdfs:subClassOf
        [ a owl:Restriction ;
          owl:onProperty ex:hasEvaluationMethod ;
          owl:allValuesFrom [ a owl:Class ; owl:intersectionOf ( ex:Assignment ex:Exam ) ] ] ,
        [ a owl:Restriction ;
          owl:onProperty ex:hasStudent ;
          owl:maxCardinality "20"^^xsd:nonNegativeInteger ] .

ex:EvaluationMethod a owl:Class .
ex:Assignment a owl:Class ; rdfs:subClassOf ex:EvaluationMethod .
ex:Exam a owl:Class ; rdfs:subClassOf ex:EvaluationMethod .

ex:Program a owl:Class .
ex:BachelorProgram a owl:Class ; rdfs:subClassOf ex:Program .
ex:MasterProgram a owl:Class ; rdfs:subClassOf ex:Program .
ex:PhDProgram a owl:Class ; rdfs:subClassOf ex:Program .

ex:Student a owl:Class ;
    rdfs:subClassOf ex:Person ,
        [ a owl:Restriction ;
          owl:onProperty ex:enrolledIn ;
          owl:someValuesFrom [ a owl:Class ;
              owl:unionOf ( ex:BachelorProgram ex:MasterProgram ex:PhDProgram ) ] ] .

ex:AmericanStudent a owl:Class ;
    rdfs:subClassOf ex:Student ,
        [ a owl:Restriction ;
          owl:onProperty ex:hasRecord ;
          owl:cardinality "5"^^xsd:nonNegativeInteger ] ,
        [ a owl:Restriction ;
          owl:onProperty ex:takesCourse ;
          owl:minQualifiedCardinality "2"^^xsd:nonNegativeInteger ;
          owl:onClass ex:Course ] ,
        [ a owl:Restriction ;
          owl:onProperty ex:livesIn ;
          owl:hasValue ex:USA ] .

ex:AcademicRecord a owl:Class .

ex:NonStudent a owl:Class ;
    owl:equivalentClass [ a owl:Class ; owl:complementOf ex:Student ] .

ex:Country a owl:Class .

ex:Weekday a owl:Class ;
    owl:equivalentClass [ a owl:Class ; owl:oneOf ( ex:Monday ex:Tuesday ex:Wednesday ) ] .

ex:Isbn a rdfs:Datatype .

# Object properties

ex:hasRector a owl:ObjectProperty, owl:FunctionalProperty ;
    rdfs:domain ex:University ;
    rdfs:range ex:Rector .

ex:hasDepartment a owl:ObjectProperty ;
    rdfs:domain ex:University ;
    rdfs:range ex:Department .

ex:author a owl:ObjectProperty ;
    rdfs:domain ex:StudyMaterial .

ex:hasEvaluationMethod a owl:ObjectProperty ;
    rdfs:domain ex:Course ;
    rdfs:range ex:EvaluationMethod .

ex:hasStudent a owl:ObjectProperty ;
    rdfs:domain ex:Course ;
    rdfs:range ex:Student .

ex:enrolledIn a owl:ObjectProperty ;
    rdfs:domain ex:Student ;
    rdfs:range ex:Program .

ex:hasRecord a owl:ObjectProperty ;
    rdfs:domain ex:Student ;
    rdfs:range ex:AcademicRecord .

ex:takesCourse a owl:ObjectProperty ;
    rdfs:domain ex:Student .

ex:livesIn a owl:ObjectProperty ;
    rdfs:domain ex:Person ;
    rdfs:range ex:Country .

# Datatype properties

ex:gender a owl:DatatypeProperty ;
    rdfs:domain ex:Person ;
    rdfs:range xsd:string .

ex:label a owl:DatatypeProperty ;
    rdfs:comment "Display name." ;
    rdfs:domain ex:Person ;
    rdfs:range xsd:string .

ex:birthDate a owl:DatatypeProperty ;
    rdfs:domain ex:Person ;
    rdfs:range xsd:date .

ex:isbn a owl:DatatypeProperty ;
    rdfs:domain ex:StudyMaterial ;
    rdfs:range ex:Isbn .

ex:pages a owl:DatatypeProperty ;
    rdfs:domain ex:StudyMaterial ;
    rdfs:range xsd:nonNegativeInteger .

ex:credits a owl:DatatypeProperty ;
    rdfs:domain [ a owl:Class ; owl:unionOf ( ex:Course ex:Program ) ] ;
    rdfs:range xsd:decimal .

# Individuals

ex:USA a owl:NamedIndividual, ex:Country ;
    rdfs:label "United States of America" .

ex:Monday a owl:NamedIndividual .
ex:Tuesday a owl:NamedIndividual .
ex:Wednesday a owl:NamedIndividual .
"#;
